//! Configuration management for the checker.
//!
//! # Overview
//!
//! The checker reads an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `MFIPPA_<SECTION>_<KEY>` environment overrides
//! - Validation before use
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mfippa::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mfippa.toml")?;
//!
//! println!("Report format: {}", config.report.format);
//! println!("Matches sampled per rule: {}", config.scan.max_matches_per_rule);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ScanConfig`] - Match sampling, document size limit, custom rule library
//! - [`ReportConfig`] - Default output format and colour
//! - [`AuditConfig`] - Hashed audit trail of scans
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [scan]
//! max_matches_per_rule = 5
//! rule_library = "${MFIPPA_RULES_DIR}/municipal.toml"
//!
//! [report]
//! format = "console"
//! color = true
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/scans.log"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::scanner::config::{AuditConfig, ScanConfig};
pub use loader::{load_config, load_or_default, DEFAULT_CONFIG_FILE};
pub use schema::{ApplicationConfig, CheckerConfig, LoggingConfig, ReportConfig};
