//! Rules command implementation
//!
//! Lists the active rule library with statute sections and severities.

use crate::config::CheckerConfig;
use crate::scanner::rules::{RuleRegistry, RuleSummary};
use anyhow::Context;
use clap::{Args, ValueEnum};

/// Output format for the rule listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListFormat {
    /// Human-readable listing
    #[default]
    Console,
    /// JSON array of rules
    Json,
}

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Console)]
    pub format: ListFormat,
}

impl RulesArgs {
    /// Execute the rules command
    pub async fn execute(&self, config: &CheckerConfig) -> anyhow::Result<i32> {
        let registry = match config.scan.rule_library {
            Some(ref path) => RuleRegistry::from_file(path),
            None => RuleRegistry::builtin(),
        };

        let registry = match registry {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("❌ Failed to load rule library");
                eprintln!("   Error: {e:#}");
                return Ok(2);
            }
        };

        let summaries = registry.summaries();
        match self.format {
            ListFormat::Console => print!("{}", format_listing(registry.statute(), &summaries)),
            ListFormat::Json => {
                let json = serde_json::to_string_pretty(&summaries)
                    .context("Failed to serialize rule listing")?;
                println!("{json}");
            }
        }

        Ok(0)
    }
}

fn format_listing(statute: &str, summaries: &[RuleSummary]) -> String {
    let mut output = String::new();

    output.push_str(&format!("📚 {} rules ({statute})\n\n", summaries.len()));
    for (i, rule) in summaries.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} [{}]\n",
            i + 1,
            rule.name,
            rule.severity.label().to_uppercase()
        ));
        output.push_str(&format!("   ID: {}\n", rule.id));
        output.push_str(&format!("   MFIPPA Reference: {}\n", rule.section));
        output.push_str(&format!("   Patterns: {}\n", rule.pattern_count));
        output.push_str(&format!("   {}\n\n", rule.description));
    }

    output
}
