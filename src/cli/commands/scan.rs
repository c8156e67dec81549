//! Scan command implementation
//!
//! This module implements the `scan` command: read a document, run the
//! compliance rules over it, and print or save the report.

use crate::config::CheckerConfig;
use crate::domain::{CheckerError, Document, Severity};
use crate::input;
use crate::scanner::{ReportFormat, ReportRenderer, ScanEngine};
use anyhow::Context;
use clap::Args;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Exit code when findings meet the `--fail-on` threshold
const EXIT_THRESHOLD_MET: i32 = 1;
/// Exit code for configuration and rule library errors
const EXIT_CONFIG_ERROR: i32 = 2;
/// Exit code for unreadable, unsupported or empty input
const EXIT_INPUT_ERROR: i32 = 3;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Text to analyze (reads standard input when neither --text nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Document to analyze (.txt or .pdf)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output format (defaults to report.format from configuration)
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable coloured console output
    #[arg(long)]
    pub no_color: bool,

    /// Exit with code 1 when any finding is at or above this severity
    #[arg(long, value_name = "SEVERITY")]
    pub fail_on: Option<Severity>,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config: &CheckerConfig) -> anyhow::Result<i32> {
        tracing::info!("Starting scan command");

        let engine = match ScanEngine::new(config.scan.clone())
            .and_then(|engine| engine.with_audit(&config.audit))
        {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("❌ Failed to prepare the compliance rules");
                eprintln!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let document = match self.read_document(config.scan.max_document_bytes).await {
            Ok(Some(document)) => document,
            Ok(None) => {
                eprintln!("❌ No input given");
                eprintln!("   Use --text, --file, or pipe a document on standard input");
                return Ok(EXIT_INPUT_ERROR);
            }
            Err(e) if e.is_input_error() => {
                eprintln!("❌ {e}");
                return Ok(EXIT_INPUT_ERROR);
            }
            Err(e) => return Err(e.into()),
        };

        let report = match engine.scan(&document) {
            Ok(report) => report,
            Err(e) if e.is_input_error() => {
                eprintln!("❌ {e}");
                return Ok(EXIT_INPUT_ERROR);
            }
            Err(e) => return Err(e.into()),
        };

        let format = self.format.unwrap_or(config.report.format);
        let use_colors = format == ReportFormat::Console
            && config.report.color
            && !self.no_color
            && self.output.is_none()
            && std::io::stdout().is_terminal();
        let renderer = ReportRenderer::new(use_colors);

        match self.output {
            Some(ref path) => {
                renderer
                    .write_to_file(&report, format, path)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                eprintln!("✅ Report written to {}", path.display());
            }
            None => {
                let rendered = renderer
                    .render(&report, format)
                    .context("Failed to render report")?;
                println!("{rendered}");
            }
        }

        if let Some(threshold) = self.fail_on {
            if report.exceeds(threshold) {
                tracing::info!(threshold = %threshold, "Findings met the fail-on threshold");
                return Ok(EXIT_THRESHOLD_MET);
            }
        }

        Ok(0)
    }

    /// Read the document from --text, --file, or piped standard input
    ///
    /// Returns `None` when no source was given and stdin is a terminal.
    async fn read_document(&self, max_bytes: u64) -> Result<Option<Document>, CheckerError> {
        if let Some(ref text) = self.text {
            return Ok(Some(input::read_inline(text.as_str())));
        }

        if let Some(ref path) = self.file {
            return input::read_file(path, max_bytes).await.map(Some);
        }

        if std::io::stdin().is_terminal() {
            return Ok(None);
        }

        input::read_stdin(max_bytes).await.map(Some)
    }
}
