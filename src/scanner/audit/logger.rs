//! Audit logger for scan operations

use crate::domain::{Finding, Severity};
use crate::scanner::report::ComplianceReport;
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    report_id: String,
    source: String,
    document_length: usize,
    findings_count: usize,
    findings: Vec<AuditFinding>,
}

/// Audit finding entry (with hashed matches)
#[derive(Debug, Serialize)]
struct AuditFinding {
    rule_id: String,
    section: String,
    severity: Severity,
    total_matches: usize,
    /// SHA-256 hashes of matched text (never log plaintext matches)
    match_hashes: Vec<String>,
}

/// Audit logger for scan operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the log directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create audit log directory: {}", parent.display())
            })?;
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Log a completed scan
    pub fn log_scan(&self, report: &ComplianceReport) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: report.analyzed_at.to_rfc3339(),
            report_id: report.report_id.to_string(),
            source: report.source.clone(),
            document_length: report.document_length,
            findings_count: report.findings.len(),
            findings: report
                .findings
                .iter()
                .map(|f| self.create_audit_finding(f))
                .collect(),
        };

        self.write_entry(&entry)
    }

    fn create_audit_finding(&self, finding: &Finding) -> AuditFinding {
        AuditFinding {
            rule_id: finding.rule_id.clone(),
            section: finding.section.clone(),
            severity: finding.severity,
            total_matches: finding.total_matches,
            match_hashes: finding
                .matches
                .iter()
                .map(|m| self.hash_match(m))
                .collect(),
        }
    }

    /// Hash a matched span using SHA-256
    fn hash_match(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        format!("{result:x}")
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Report: {} | Source: {} | Length: {} | Findings: {}",
                entry.timestamp,
                entry.report_id,
                entry.source,
                entry.document_length,
                entry.findings_count
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}
