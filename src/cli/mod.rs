//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the checker using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// MFIPPA Compliance Checker - screen documents for personal information
#[derive(Parser, Debug)]
#[command(name = "mfippa")]
#[command(version, about, long_about = None)]
#[command(author = "MFIPPA Checker Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to ./mfippa.toml when present)
    #[arg(short, long, env = "MFIPPA_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MFIPPA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a document for personal information and MFIPPA-relevant language
    Scan(commands::scan::ScanArgs),

    /// List the active compliance rules
    Rules(commands::rules::RulesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
