//! Finding data model
//!
//! A [`Finding`] pairs the text a rule matched with the statute section it
//! relates to and a severity label. Findings are created at scan time and
//! only live as long as the report that holds them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity label attached to a finding
///
/// Ordered so that `Info < Warning`, which lets callers use a severity as a
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Statute-relevant language worth a reviewer's attention
    Info,
    /// Likely personal information or restricted activity
    Warning,
}

impl Severity {
    /// Get human-readable label for the severity
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Informational",
            Self::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" | "informational" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            _ => Err(format!(
                "Unknown severity '{s}'. Must be one of: warning, info"
            )),
        }
    }
}

/// A single detected instance of potential personal information or
/// statute-relevant language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable rule identifier (e.g. `personal_information`)
    pub rule_id: String,
    /// Display name of the rule
    pub rule: String,
    /// Statute citation (e.g. "Section 2(1)")
    pub section: String,
    /// What the cited section requires
    pub description: String,
    /// Severity label
    pub severity: Severity,
    /// Unique matched spans, in first-seen order
    pub matches: Vec<String>,
    /// Number of raw matches before sampling
    pub total_matches: usize,
}

impl Finding {
    /// Whether this finding is at or above the given severity
    pub fn is_at_least(&self, threshold: Severity) -> bool {
        self.severity >= threshold
    }
}
