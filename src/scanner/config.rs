//! Scan configuration

use crate::scanner::detector::regex::DEFAULT_MAX_MATCHES_PER_RULE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Scan settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Raw matches sampled per rule before de-duplication
    #[serde(default = "default_max_matches_per_rule")]
    pub max_matches_per_rule: usize,

    /// Largest document accepted, in bytes
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: u64,

    /// Path to a custom rule library TOML file (built-in MFIPPA rules when unset)
    #[serde(default)]
    pub rule_library: Option<PathBuf>,
}

fn default_max_matches_per_rule() -> usize {
    DEFAULT_MAX_MATCHES_PER_RULE
}

fn default_max_document_bytes() -> u64 {
    10 * 1024 * 1024
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_matches_per_rule: default_max_matches_per_rule(),
            max_document_bytes: default_max_document_bytes(),
            rule_library: None,
        }
    }
}

impl ScanConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_matches_per_rule == 0 || self.max_matches_per_rule > 100 {
            return Err(format!(
                "scan.max_matches_per_rule must be between 1 and 100, got {}",
                self.max_matches_per_rule
            ));
        }

        if self.max_document_bytes == 0 {
            return Err("scan.max_document_bytes must be > 0".to_string());
        }

        if let Some(ref path) = self.rule_library {
            if !path.exists() {
                return Err(format!("Rule library file not found: {}", path.display()));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "Rule library must be a TOML file: {}",
                    path.display()
                ));
            }
        }

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/scans.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}
