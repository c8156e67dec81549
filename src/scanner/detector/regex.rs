//! Regex-based compliance detector

use super::Detector;
use crate::domain::Finding;
use crate::scanner::rules::{CompiledRule, RuleRegistry};
use anyhow::Result;
use std::sync::Arc;

/// Default cap on raw matches kept per rule
pub const DEFAULT_MAX_MATCHES_PER_RULE: usize = 5;

/// Regex-based detector over an ordered rule registry
pub struct RegexScanner {
    registry: Arc<RuleRegistry>,
    max_matches_per_rule: usize,
}

impl RegexScanner {
    /// Create a new scanner with the built-in rules
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(Arc::new(RuleRegistry::builtin()?)))
    }

    /// Create a new scanner over a custom registry
    pub fn with_registry(registry: Arc<RuleRegistry>) -> Self {
        Self {
            registry,
            max_matches_per_rule: DEFAULT_MAX_MATCHES_PER_RULE,
        }
    }

    /// Set the number of raw matches sampled per rule (minimum 1)
    pub fn with_max_matches(mut self, max: usize) -> Self {
        self.max_matches_per_rule = max.max(1);
        self
    }

    /// Evaluate a single rule against the text
    ///
    /// The sample is the first `max_matches_per_rule` raw matches (patterns in
    /// order, then text order), de-duplicated by exact text.
    fn detect_rule(&self, rule: &CompiledRule, text: &str) -> Option<Finding> {
        let mut total_matches = 0;
        let mut sample: Vec<&str> = Vec::with_capacity(self.max_matches_per_rule);

        for pattern in &rule.patterns {
            for found in pattern.find_iter(text) {
                total_matches += 1;
                if sample.len() < self.max_matches_per_rule {
                    sample.push(found.as_str());
                }
            }
        }

        if total_matches == 0 {
            return None;
        }

        let mut matches: Vec<String> = Vec::with_capacity(sample.len());
        for span in sample {
            if !matches.iter().any(|m| m == span) {
                matches.push(span.to_string());
            }
        }

        tracing::debug!(
            rule_id = %rule.id,
            total_matches,
            sampled = matches.len(),
            "Rule matched"
        );

        Some(Finding {
            rule_id: rule.id.clone(),
            rule: rule.name.clone(),
            section: rule.section.clone(),
            description: rule.description.clone(),
            severity: rule.severity,
            matches,
            total_matches,
        })
    }
}

impl Detector for RegexScanner {
    fn detect(&self, text: &str) -> Vec<Finding> {
        self.registry
            .rules()
            .iter()
            .filter_map(|rule| self.detect_rule(rule, text))
            .collect()
    }

    fn rule_count(&self) -> usize {
        self.registry.len()
    }
}
