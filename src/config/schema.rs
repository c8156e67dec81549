//! Configuration schema types
//!
//! This module defines the configuration structure for the checker. Every
//! section is optional in the TOML file and falls back to its defaults.

use crate::scanner::config::{AuditConfig, ScanConfig};
use crate::scanner::render::ReportFormat;
use serde::{Deserialize, Serialize};

/// Main checker configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Scan limits and rule library
    #[serde(default)]
    pub scan: ScanConfig,

    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Audit trail of scans
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CheckerConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message naming the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.scan.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default output format when `--format` is not given
    #[serde(default)]
    pub format: ReportFormat,

    /// Colour-code console output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            color: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: CheckerConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.scan.max_matches_per_rule, 5);
        assert_eq!(config.report.format, ReportFormat::Console);
        assert!(config.report.color);
        assert!(!config.audit.enabled);
        assert!(!config.logging.local_enabled);
        assert_eq!(config.logging.local_path, "./logs");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let config: CheckerConfig = toml::from_str(
            r#"
[report]
format = "markdown"

[scan]
max_matches_per_rule = 10
"#,
        )
        .unwrap();

        assert_eq!(config.report.format, ReportFormat::Markdown);
        assert!(config.report.color);
        assert_eq!(config.scan.max_matches_per_rule, 10);
        assert_eq!(config.scan.max_document_bytes, 10_485_760);
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = CheckerConfig::default();
        config.application.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log_level 'verbose'"));
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = CheckerConfig::default();
        config.logging.local_rotation = "size".to_string();
        assert!(config.validate().is_err());

        config.logging.local_rotation = "hourly".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scan_section_validated() {
        let mut config = CheckerConfig::default();
        config.scan.max_matches_per_rule = 0;
        assert!(config.validate().unwrap_err().contains("max_matches_per_rule"));
    }

    #[test]
    fn test_unknown_report_format_rejected() {
        let result: Result<CheckerConfig, _> = toml::from_str("[report]\nformat = \"pdf\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = CheckerConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: CheckerConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.scan.max_document_bytes, config.scan.max_document_bytes);
        assert_eq!(parsed.audit.log_path, config.audit.log_path);
    }
}
