//! Compliance detection module
//!
//! Provides the trait-based detection interface and the regex implementation
//! used to turn document text into findings.

pub mod regex;

use crate::domain::Finding;

/// Trait for finding detectors
pub trait Detector: Send + Sync {
    /// Detect findings in the full document text
    ///
    /// Findings are returned in rule order, one per rule that matched.
    fn detect(&self, text: &str) -> Vec<Finding>;

    /// Number of rules this detector evaluates
    fn rule_count(&self) -> usize;
}
