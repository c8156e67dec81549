//! Rule library for compliance scanning
//!
//! A rule ties a set of regex patterns to a statute section and a severity.
//! Libraries are TOML documents with an ordered `[[rules]]` array; the
//! built-in MFIPPA library is embedded at compile time.

use crate::domain::Severity;
use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_LIBRARY: &str = include_str!("../../rules/mfippa_rules.toml");

const DEFAULT_STATUTE: &str = "MFIPPA R.S.O. 1990, c. M.56";

/// Rule definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDefinition {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Statute citation
    pub section: String,
    /// What the section requires
    pub description: String,
    /// Severity label ("warning" or "info")
    pub severity: String,
    /// Regex patterns, matched case-insensitively
    pub patterns: Vec<String>,
    /// Guidance shown when the rule fires
    #[serde(default)]
    pub recommendation: Option<RecommendationTemplate>,
}

/// Guidance attached to a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTemplate {
    /// Heading, e.g. "Personal Information Detected"
    pub title: String,
    /// Individual action items
    pub items: Vec<String>,
}

/// Rule library container
#[derive(Debug, Deserialize)]
struct RuleLibrary {
    #[serde(default)]
    statute: Option<String>,
    #[serde(default)]
    general_recommendations: Vec<String>,
    #[serde(default)]
    rules: Vec<RuleDefinition>,
}

/// Compiled rule with metadata
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub id: String,
    pub name: String,
    pub section: String,
    pub description: String,
    pub severity: Severity,
    /// Compiled patterns in library order
    pub patterns: Vec<Regex>,
    pub recommendation: Option<RecommendationTemplate>,
}

/// Serializable view of a rule for listings
#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    pub id: String,
    pub name: String,
    pub section: String,
    pub severity: Severity,
    pub description: String,
    pub pattern_count: usize,
    pub patterns: Vec<String>,
}

/// Ordered rule registry
#[derive(Debug)]
pub struct RuleRegistry {
    statute: String,
    rules: Vec<CompiledRule>,
    general_recommendations: Vec<String>,
}

impl RuleRegistry {
    /// Create a new rule registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read rule library: {}", path.as_ref().display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Invalid rule library: {}", path.as_ref().display()))
    }

    /// Create a rule registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: RuleLibrary =
            toml::from_str(content).context("Failed to parse rule library TOML")?;

        if library.rules.is_empty() {
            anyhow::bail!("Rule library defines no rules");
        }

        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(library.rules.len());

        for def in library.rules {
            if !seen.insert(def.id.clone()) {
                anyhow::bail!("Duplicate rule id: {}", def.id);
            }
            if def.patterns.is_empty() {
                anyhow::bail!("Rule '{}' has no patterns", def.id);
            }

            let severity: Severity = def
                .severity
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid severity in rule '{}'", def.id))?;

            let patterns = def
                .patterns
                .iter()
                .map(|p| {
                    RegexBuilder::new(p)
                        .case_insensitive(true)
                        .build()
                        .with_context(|| format!("Invalid regex in rule '{}': {p}", def.id))
                })
                .collect::<Result<Vec<_>>>()?;

            rules.push(CompiledRule {
                id: def.id,
                name: def.name,
                section: def.section,
                description: def.description,
                severity,
                patterns,
                recommendation: def.recommendation,
            });
        }

        Ok(Self {
            statute: library
                .statute
                .unwrap_or_else(|| DEFAULT_STATUTE.to_string()),
            rules,
            general_recommendations: library.general_recommendations,
        })
    }

    /// Create the built-in MFIPPA rule registry
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_LIBRARY).context("Built-in rule library is invalid")
    }

    /// All rules, in evaluation order
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Look up a rule by id
    pub fn get(&self, id: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Statute the library cites
    pub fn statute(&self) -> &str {
        &self.statute
    }

    /// Recommendations appended to every report with findings
    pub fn general_recommendations(&self) -> &[String] {
        &self.general_recommendations
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Listing view of every rule
    pub fn summaries(&self) -> Vec<RuleSummary> {
        self.rules
            .iter()
            .map(|r| RuleSummary {
                id: r.id.clone(),
                name: r.name.clone(),
                section: r.section.clone(),
                severity: r.severity,
                description: r.description.clone(),
                pattern_count: r.patterns.len(),
                patterns: r.patterns.iter().map(|p| p.as_str().to_string()).collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_rules() {
        let registry = RuleRegistry::builtin().unwrap();
        let ids: Vec<&str> = registry.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "personal_information",
                "collection_authority",
                "use_limitation",
                "disclosure",
                "retention",
                "access_request",
                "exemptions",
            ]
        );
        assert_eq!(registry.statute(), "MFIPPA R.S.O. 1990, c. M.56");
        assert_eq!(registry.general_recommendations().len(), 4);
    }

    #[test]
    fn test_builtin_severities_and_sections() {
        let registry = RuleRegistry::builtin().unwrap();
        let warnings: Vec<&str> = registry
            .rules()
            .iter()
            .filter(|r| r.severity == Severity::Warning)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(warnings, vec!["personal_information", "disclosure"]);

        assert_eq!(
            registry.get("personal_information").unwrap().section,
            "Section 2(1)"
        );
        assert_eq!(registry.get("exemptions").unwrap().section, "Sections 6-15");
        assert_eq!(registry.get("personal_information").unwrap().patterns.len(), 16);
    }

    #[test]
    fn test_builtin_recommendations() {
        let registry = RuleRegistry::builtin().unwrap();
        let pi = registry.get("personal_information").unwrap();
        let rec = pi.recommendation.as_ref().unwrap();
        assert_eq!(rec.title, "Personal Information Detected");
        assert_eq!(rec.items.len(), 4);
        assert!(registry.get("retention").unwrap().recommendation.is_none());
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let registry = RuleRegistry::builtin().unwrap();
        let pi = registry.get("personal_information").unwrap();
        assert!(pi.patterns.iter().any(|p| p.is_match("MEDICAL records")));
        assert!(pi.patterns.iter().any(|p| p.is_match("dob: 1990")));
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let toml = r#"
[[rules]]
id = "broken"
name = "Broken"
section = "Section 1"
severity = "info"
description = "bad"
patterns = ['(unclosed']
"#;
        let err = RuleRegistry::from_toml(toml).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid regex in rule 'broken'"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let toml = r#"
[[rules]]
id = "dup"
name = "A"
section = "S1"
severity = "info"
description = "a"
patterns = ['a']

[[rules]]
id = "dup"
name = "B"
section = "S2"
severity = "warning"
description = "b"
patterns = ['b']
"#;
        let err = RuleRegistry::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("Duplicate rule id: dup"));
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let toml = r#"
[[rules]]
id = "sev"
name = "Sev"
section = "S1"
severity = "critical"
description = "x"
patterns = ['x']
"#;
        let err = RuleRegistry::from_toml(toml).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid severity in rule 'sev'"));
    }

    #[test]
    fn test_empty_library_rejected() {
        assert!(RuleRegistry::from_toml("statute = \"X\"").is_err());
    }

    #[test]
    fn test_empty_patterns_rejected() {
        let toml = r#"
[[rules]]
id = "empty"
name = "Empty"
section = "S1"
severity = "info"
description = "x"
patterns = []
"#;
        assert!(RuleRegistry::from_toml(toml).is_err());
    }

    #[test]
    fn test_custom_library_defaults_statute() {
        let toml = r#"
[[rules]]
id = "only"
name = "Only"
section = "S1"
severity = "warning"
description = "x"
patterns = ['\bsecret\b']
"#;
        let registry = RuleRegistry::from_toml(toml).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.statute(), DEFAULT_STATUTE);
        assert!(registry.general_recommendations().is_empty());
    }

    #[test]
    fn test_summaries() {
        let registry = RuleRegistry::builtin().unwrap();
        let summaries = registry.summaries();
        assert_eq!(summaries.len(), registry.len());
        assert_eq!(summaries[3].id, "disclosure");
        assert_eq!(summaries[3].pattern_count, 8);
        assert_eq!(summaries[3].patterns[0], r"\bdisclose\b");
    }
}
