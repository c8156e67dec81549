//! Report rendering
//!
//! Turns a [`ComplianceReport`] into console text with colour-coded
//! severity, pretty JSON, or Markdown.

use crate::domain::Severity;
use crate::scanner::report::{ComplianceReport, Recommendation};
use chrono::Local;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const RULE: &str = "═══════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────";

const ACT_NAME: &str = "Municipal Freedom of Information and Protection of Privacy Act";

const NO_CONCERNS: &str = "No immediate compliance concerns detected";

const MANUAL_REVIEW_NOTE: &str =
    "Note: This is an automated check. Manual review by FOI/Privacy Coordinator is recommended.";

const DISCLAIMER: &str = "This is an automated screening tool. All findings should be reviewed \
by your FOI/Privacy Coordinator or legal counsel.";

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable terminal output
    #[default]
    Console,
    /// Pretty-printed JSON
    Json,
    /// Markdown document
    Markdown,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!(
                "Invalid report format '{s}'. Must be one of: console, json, markdown"
            )),
        }
    }
}

/// Renders reports in the requested format
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    use_colors: bool,
}

impl ReportRenderer {
    /// Create a renderer; colours only apply to console output
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Renderer without ANSI colours
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Render a report
    pub fn render(
        &self,
        report: &ComplianceReport,
        format: ReportFormat,
    ) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Console => Ok(self.format_console(report)),
            ReportFormat::Json => report.format_json(),
            ReportFormat::Markdown => Ok(self.format_markdown(report)),
        }
    }

    /// Render a report and write it to a file
    pub fn write_to_file(
        &self,
        report: &ComplianceReport,
        format: ReportFormat,
        path: &Path,
    ) -> std::io::Result<()> {
        let content = self
            .render(report, format)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, content)
    }

    fn severity_marker(severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
        }
    }

    fn paint(&self, text: &str, severity: Severity) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match severity {
            Severity::Warning => text.yellow().bold().to_string(),
            Severity::Info => text.blue().bold().to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn analysis_date(report: &ComplianceReport) -> String {
        report
            .analyzed_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }

    /// Format report for console output
    pub fn format_console(&self, report: &ComplianceReport) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(RULE);
        output.push('\n');
        output.push_str(&self.heading("            🔒 MFIPPA COMPLIANCE ANALYSIS REPORT"));
        output.push('\n');
        output.push_str(&format!("  {ACT_NAME}\n"));
        output.push_str(RULE);
        output.push_str("\n\n");

        output.push_str(&format!("  Analysis Date:     {}\n", Self::analysis_date(report)));
        output.push_str(&format!("  Document:          {}\n", report.source));
        output.push_str(&format!(
            "  Document Length:   {} characters\n",
            report.document_length
        ));
        output.push_str(&format!("  Report ID:         {}\n\n", report.report_id));

        if !report.has_findings() {
            let message = format!("✅ {NO_CONCERNS}");
            if self.use_colors {
                output.push_str(&format!("  {}\n", message.green().bold()));
            } else {
                output.push_str(&format!("  {message}\n"));
            }
            output.push_str(&format!("  {MANUAL_REVIEW_NOTE}\n\n"));
            output.push_str(RULE);
            output.push('\n');
            return output;
        }

        output.push_str(&self.heading("📊 SUMMARY"));
        output.push('\n');
        output.push_str(THIN_RULE);
        output.push('\n');
        output.push_str(&format!(
            "  Total Issues Found:  {}\n",
            report.summary.total_issues
        ));
        output.push_str(&format!(
            "  Warnings:            {}\n",
            self.paint(&report.summary.warnings.to_string(), Severity::Warning)
        ));
        output.push_str(&format!(
            "  Informational:       {}\n\n",
            self.paint(&report.summary.informational.to_string(), Severity::Info)
        ));

        output.push_str(&self.heading("🔍 DETAILED FINDINGS"));
        output.push('\n');
        output.push_str(THIN_RULE);
        output.push('\n');

        for (i, finding) in report.findings.iter().enumerate() {
            let title = format!(
                "{} {}. {} [{}]",
                Self::severity_marker(finding.severity),
                i + 1,
                finding.rule,
                finding.severity.label().to_uppercase()
            );
            output.push_str(&format!("\n  {}\n", self.paint(&title, finding.severity)));
            output.push_str(&format!("     MFIPPA Reference: {}\n", finding.section));
            output.push_str(&format!("     Description:      {}\n", finding.description));
            if !finding.matches.is_empty() {
                output.push_str(&format!(
                    "     Detected in document ({} total):\n",
                    finding.total_matches
                ));
                for span in &finding.matches {
                    output.push_str(&format!("       - `{span}`\n"));
                }
            }
        }
        output.push('\n');

        output.push_str(&self.heading("📋 RECOMMENDATIONS"));
        output.push('\n');
        output.push_str(THIN_RULE);
        output.push('\n');
        for recommendation in &report.recommendations {
            self.push_console_recommendation(&mut output, recommendation);
        }
        output.push('\n');

        output.push_str(&format!("⚠️  Disclaimer: {DISCLAIMER}\n"));
        output.push_str(&format!("   Based on {}\n", report.statute));
        output.push_str(RULE);
        output.push('\n');

        output
    }

    fn push_console_recommendation(&self, output: &mut String, recommendation: &Recommendation) {
        let title = format!("{}:", recommendation.title);
        output.push_str(&format!("\n  {}\n", self.paint(&title, recommendation.severity)));
        for item in &recommendation.items {
            output.push_str(&format!("    • {item}\n"));
        }
    }

    /// Format report as Markdown
    pub fn format_markdown(&self, report: &ComplianceReport) -> String {
        let mut output = String::new();

        output.push_str("# 🔒 MFIPPA Compliance Analysis Report\n\n");
        output.push_str(&format!("_{ACT_NAME}_\n\n"));
        output.push_str(&format!(
            "**Analysis Date:** {}  \n",
            Self::analysis_date(report)
        ));
        output.push_str(&format!("**Document:** {}  \n", report.source));
        output.push_str(&format!(
            "**Document Length:** {} characters  \n",
            report.document_length
        ));
        output.push_str(&format!("**Report ID:** {}\n\n", report.report_id));

        if !report.has_findings() {
            output.push_str(&format!("✅ **{NO_CONCERNS}**\n\n"));
            output.push_str(&format!("{MANUAL_REVIEW_NOTE}\n"));
            return output;
        }

        output.push_str("## 📊 Summary\n\n");
        output.push_str("| Total Issues Found | Warnings | Informational |\n");
        output.push_str("|---|---|---|\n");
        output.push_str(&format!(
            "| {} | {} | {} |\n\n",
            report.summary.total_issues, report.summary.warnings, report.summary.informational
        ));

        output.push_str("## Detailed Findings\n\n");
        for (i, finding) in report.findings.iter().enumerate() {
            output.push_str(&format!(
                "### {} {}. {}\n\n",
                Self::severity_marker(finding.severity),
                i + 1,
                finding.rule
            ));
            output.push_str(&format!("**MFIPPA Reference:** {}  \n", finding.section));
            output.push_str(&format!("**Severity:** {}  \n", finding.severity.label()));
            output.push_str(&format!("**Description:** {}\n\n", finding.description));
            if !finding.matches.is_empty() {
                output.push_str("**Detected in document:**\n\n");
                for span in &finding.matches {
                    output.push_str(&format!("- `{span}`\n"));
                }
                output.push('\n');
            }
        }

        output.push_str("## 📋 Recommendations\n\n");
        for recommendation in &report.recommendations {
            output.push_str(&format!("**{}:**\n\n", recommendation.title));
            for item in &recommendation.items {
                output.push_str(&format!("- {item}\n"));
            }
            output.push('\n');
        }

        output.push_str(&format!("> **⚠️ Disclaimer:** {DISCLAIMER}\n"));
        output.push_str(&format!(">\n> Based on {}\n", report.statute));

        output
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
