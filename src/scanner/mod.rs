//! Compliance scanning module
//!
//! This module screens document text for personal information and language
//! that touches MFIPPA obligations, and reports each hit against the statute
//! section it relates to.
//!
//! # Architecture
//!
//! The scan pipeline consists of:
//! - **Rules**: an ordered library of regex patterns with citations and severities
//! - **Detection**: case-insensitive regex matching, sampled per rule
//! - **Report**: summary counts, findings, and recommendations
//! - **Render**: console (colour-coded severity), JSON, or Markdown output
//! - **Audit**: append-only log with hashed matched text
//!
//! # Usage
//!
//! ```rust
//! use mfippa::scanner::{ScanEngine, config::ScanConfig, render::{ReportFormat, ReportRenderer}};
//!
//! let engine = ScanEngine::new(ScanConfig::default())?;
//! let report = engine.scan_text("Records will be shared with a third party.")?;
//! let text = ReportRenderer::plain().render(&report, ReportFormat::Console)?;
//! assert!(text.contains("Disclosure Rules"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod render;
pub mod report;
pub mod rules;

// Re-export main types
pub use config::{AuditConfig, ScanConfig};
pub use engine::ScanEngine;
pub use render::{ReportFormat, ReportRenderer};
pub use report::{ComplianceReport, Recommendation, ReportSummary};
pub use rules::RuleRegistry;
