// MFIPPA Compliance Checker
// Copyright (c) 2025 MFIPPA Checker Contributors
// Licensed under the MIT License

//! # MFIPPA Compliance Checker
//!
//! Screens documents for personal information and for language that touches
//! obligations under Ontario's Municipal Freedom of Information and Protection
//! of Privacy Act (R.S.O. 1990, c. M.56).
//!
//! ## Overview
//!
//! This library provides:
//! - **Intake** of pasted text, standard input, plain text files, and PDFs
//! - **Detection** with an ordered, case-insensitive regex rule library
//! - **Reporting** with statute citations, severities, and recommendations
//! - **Auditing** of scans without storing matched text in plaintext
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`scanner`] - Rule library, detection, reports, rendering, audit
//! - [`input`] - Document intake
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use mfippa::scanner::{ScanEngine, ScanConfig};
//!
//! let engine = ScanEngine::new(ScanConfig::default())?;
//! let report = engine.scan_text("Her date of birth and income will be shared with a third party.")?;
//!
//! assert_eq!(report.summary.warnings, 2);
//! for finding in &report.findings {
//!     println!("{} ({}): {:?}", finding.rule, finding.section, finding.matches);
//! }
//! # Ok::<(), mfippa::domain::CheckerError>(())
//! ```
//!
//! ## Error Handling
//!
//! All library operations return [`domain::Result`], backed by
//! [`domain::CheckerError`]:
//!
//! ```rust
//! use mfippa::domain::{CheckerError, InputError};
//! use mfippa::scanner::{ScanEngine, ScanConfig};
//!
//! let engine = ScanEngine::new(ScanConfig::default())?;
//! let result = engine.scan_text("   ");
//! assert!(matches!(result, Err(CheckerError::Input(InputError::EmptyDocument))));
//! # Ok::<(), CheckerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod input;
pub mod logging;
pub mod scanner;
