//! Compliance report
//!
//! Aggregates the findings of one scan with summary counts and the
//! recommendations that follow from the rules that fired.

use crate::domain::{Document, Finding, Severity};
use crate::scanner::rules::RuleRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title used for the library-wide recommendation block
pub const GENERAL_RECOMMENDATIONS_TITLE: &str = "General Recommendations";

/// Compliance report for a single document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Unique report identifier
    pub report_id: Uuid,

    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,

    /// Statute the findings cite
    pub statute: String,

    /// Where the document came from
    pub source: String,

    /// Document length in characters
    pub document_length: usize,

    /// Findings in rule order
    pub findings: Vec<Finding>,

    /// Counts by severity
    pub summary: ReportSummary,

    /// Follow-up actions
    pub recommendations: Vec<Recommendation>,
}

/// Counts by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_issues: usize,
    pub warnings: usize,
    pub informational: usize,
}

/// A block of follow-up actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub severity: Severity,
    pub items: Vec<String>,
}

impl ReportSummary {
    /// Count findings by severity
    pub fn from_findings(findings: &[Finding]) -> Self {
        let warnings = findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count();
        let informational = findings
            .iter()
            .filter(|f| f.severity == Severity::Info)
            .count();

        Self {
            total_issues: findings.len(),
            warnings,
            informational,
        }
    }
}

impl ComplianceReport {
    /// Build a report from scan findings
    ///
    /// Each fired rule with a recommendation contributes it in rule order;
    /// the library's general recommendations follow whenever anything fired.
    pub fn new(document: &Document, findings: Vec<Finding>, registry: &RuleRegistry) -> Self {
        let mut recommendations = Vec::new();

        for finding in &findings {
            let template = registry
                .get(&finding.rule_id)
                .and_then(|rule| rule.recommendation.as_ref());
            if let Some(template) = template {
                recommendations.push(Recommendation {
                    title: template.title.clone(),
                    severity: finding.severity,
                    items: template.items.clone(),
                });
            }
        }

        if !findings.is_empty() && !registry.general_recommendations().is_empty() {
            recommendations.push(Recommendation {
                title: GENERAL_RECOMMENDATIONS_TITLE.to_string(),
                severity: Severity::Info,
                items: registry.general_recommendations().to_vec(),
            });
        }

        Self {
            report_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            statute: registry.statute().to_string(),
            source: document.source.to_string(),
            document_length: document.char_count(),
            summary: ReportSummary::from_findings(&findings),
            findings,
            recommendations,
        }
    }

    /// Check if anything was found
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Highest severity across all findings
    pub fn highest_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }

    /// Whether any finding is at or above the threshold
    pub fn exceeds(&self, threshold: Severity) -> bool {
        self.findings.iter().any(|f| f.is_at_least(threshold))
    }

    /// Look up the finding for a rule
    pub fn finding(&self, rule_id: &str) -> Option<&Finding> {
        self.findings.iter().find(|f| f.rule_id == rule_id)
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
