//! Main scan engine
//!
//! This module provides the [`ScanEngine`] that orchestrates rule loading,
//! detection, report building, and audit logging for a document.
//!
//! # Examples
//!
//! ```
//! use mfippa::scanner::{ScanEngine, config::ScanConfig};
//!
//! let engine = ScanEngine::new(ScanConfig::default())?;
//! let report = engine.scan_text("Contact jane.doe@example.com about her medical file")?;
//!
//! assert_eq!(report.summary.warnings, 1);
//! # Ok::<(), mfippa::domain::CheckerError>(())
//! ```

use crate::domain::{CheckerError, Document, DocumentSource, InputError, Result};
use crate::scanner::{
    audit::AuditLogger,
    config::{AuditConfig, ScanConfig},
    detector::{regex::RegexScanner, Detector},
    report::ComplianceReport,
    rules::RuleRegistry,
};
use std::sync::Arc;
use std::time::Instant;

/// Main scan engine
///
/// The engine is immutable after construction and can be shared across
/// threads behind an `Arc`.
pub struct ScanEngine {
    config: ScanConfig,
    registry: Arc<RuleRegistry>,
    detector: Arc<dyn Detector>,
    audit_logger: Option<AuditLogger>,
}

impl ScanEngine {
    /// Create a new scan engine
    ///
    /// Loads the rule library named by `rule_library`, or the built-in
    /// MFIPPA rules when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the rule library
    /// cannot be loaded.
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate().map_err(CheckerError::Configuration)?;

        let registry = match config.rule_library {
            Some(ref path) => RuleRegistry::from_file(path),
            None => RuleRegistry::builtin(),
        }
        .map_err(|e| CheckerError::Rules(format!("{e:#}")))?;

        Ok(Self::with_registry(config, registry))
    }

    /// Create a scan engine over an already loaded registry
    pub fn with_registry(config: ScanConfig, registry: RuleRegistry) -> Self {
        let registry = Arc::new(registry);
        let detector: Arc<dyn Detector> = Arc::new(
            RegexScanner::with_registry(Arc::clone(&registry))
                .with_max_matches(config.max_matches_per_rule),
        );

        Self {
            config,
            registry,
            detector,
            audit_logger: None,
        }
    }

    /// Enable audit logging according to the audit configuration
    pub fn with_audit(mut self, audit: &AuditConfig) -> Result<Self> {
        audit.validate().map_err(CheckerError::Configuration)?;

        self.audit_logger = if audit.enabled {
            Some(
                AuditLogger::new(audit.log_path.clone(), audit.json_format)
                    .map_err(|e| CheckerError::Io(format!("{e:#}")))?,
            )
        } else {
            None
        };

        Ok(self)
    }

    /// Scan a document and build its compliance report
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EmptyDocument`] for blank text,
    /// [`InputError::TooLarge`] past the size limit, and an I/O error if the
    /// audit record cannot be written.
    pub fn scan(&self, document: &Document) -> Result<ComplianceReport> {
        if document.is_blank() {
            return Err(InputError::EmptyDocument.into());
        }

        let size = document.text.len() as u64;
        if size > self.config.max_document_bytes {
            return Err(InputError::TooLarge {
                size,
                limit: self.config.max_document_bytes,
            }
            .into());
        }

        let start = Instant::now();
        crate::log_scan_start!(document.source, self.detector.rule_count());

        let findings = self.detector.detect(&document.text);
        let report = ComplianceReport::new(document, findings, &self.registry);

        crate::log_scan_complete!(report.findings.len(), start.elapsed());

        if let Some(ref logger) = self.audit_logger {
            logger
                .log_scan(&report)
                .map_err(|e| CheckerError::Io(format!("{e:#}")))?;
        }

        Ok(report)
    }

    /// Scan pasted text
    pub fn scan_text(&self, text: &str) -> Result<ComplianceReport> {
        self.scan(&Document::new(DocumentSource::Inline, text))
    }

    /// The active rule library
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Check if scans are audited
    pub fn is_audited(&self) -> bool {
        self.audit_logger.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_engine_creation() {
        let engine = ScanEngine::new(ScanConfig::default()).unwrap();
        assert_eq!(engine.registry().len(), 7);
        assert!(!engine.is_audited());
    }

    #[test]
    fn test_scan_text() {
        let engine = ScanEngine::new(ScanConfig::default()).unwrap();
        let report = engine
            .scan_text("The data will be disclosed to a third party")
            .unwrap();

        let disclosure = report.finding("disclosure").unwrap();
        assert_eq!(disclosure.severity, Severity::Warning);
        assert!(disclosure.matches.contains(&"disclosed".to_string()));
        assert!(disclosure.matches.contains(&"third party".to_string()));
    }

    #[test]
    fn test_empty_document_rejected() {
        let engine = ScanEngine::new(ScanConfig::default()).unwrap();
        assert!(matches!(
            engine.scan_text(""),
            Err(CheckerError::Input(InputError::EmptyDocument))
        ));
        assert!(matches!(
            engine.scan_text("   \n\t"),
            Err(CheckerError::Input(InputError::EmptyDocument))
        ));
    }

    #[test]
    fn test_document_size_limit() {
        let config = ScanConfig {
            max_document_bytes: 8,
            ..Default::default()
        };
        let engine = ScanEngine::new(config).unwrap();
        assert!(matches!(
            engine.scan_text("more than eight bytes"),
            Err(CheckerError::Input(InputError::TooLarge { size: 21, limit: 8 }))
        ));
    }

    #[test]
    fn test_custom_rule_library() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
general_recommendations = ["Escalate to the clerk"]

[[rules]]
id = "badge"
name = "Badge Numbers"
section = "Section 2(1)(c)"
severity = "warning"
description = "Identifying numbers assigned to an individual"
patterns = ['\bbadge\s+#?\d+\b']
"#
        )
        .unwrap();

        let config = ScanConfig {
            rule_library: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let engine = ScanEngine::new(config).unwrap();
        assert_eq!(engine.registry().len(), 1);

        let report = engine.scan_text("Officer BADGE #4411 responded").unwrap();
        assert_eq!(report.findings[0].matches, vec!["BADGE #4411"]);
        assert_eq!(report.recommendations[0].items, vec!["Escalate to the clerk"]);
    }

    #[test]
    fn test_invalid_rule_library_is_rules_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[[rules]]\nid = \"x\"\n").unwrap();

        let config = ScanConfig {
            rule_library: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            ScanEngine::new(config),
            Err(CheckerError::Rules(_))
        ));
    }

    #[test]
    fn test_scan_with_audit() {
        let dir = tempdir().unwrap();
        let audit = AuditConfig {
            enabled: true,
            log_path: dir.path().join("scans.log"),
            json_format: true,
        };

        let engine = ScanEngine::new(ScanConfig::default())
            .unwrap()
            .with_audit(&audit)
            .unwrap();
        assert!(engine.is_audited());

        engine.scan_text("Her income is confidential").unwrap();

        let content = std::fs::read_to_string(dir.path().join("scans.log")).unwrap();
        assert!(content.contains("exemptions"));
        assert!(!content.contains("income"));
    }
}
