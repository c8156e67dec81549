// MFIPPA Compliance Checker
// Copyright (c) 2025 MFIPPA Checker Contributors
// Licensed under the MIT License

use clap::Parser;
use mfippa::cli::{Cli, Commands};
use mfippa::config::{load_or_default, CheckerConfig, LoggingConfig};
use mfippa::domain::Result;
use mfippa::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Configuration errors are reported by the command that needs it
    let config = load_or_default(cli.config.as_deref());

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(|_| LoggingConfig::default());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "MFIPPA Compliance Checker"
    );

    let exit_code = match execute_command(&cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: Result<CheckerConfig>) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Init(args) => args.execute().await,
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref()).await,
        Commands::Scan(args) => match config {
            Ok(config) => args.execute(&config).await,
            Err(e) => config_failure(&e),
        },
        Commands::Rules(args) => match config {
            Ok(config) => args.execute(&config).await,
            Err(e) => config_failure(&e),
        },
    }
}

fn config_failure(error: &mfippa::domain::CheckerError) -> anyhow::Result<i32> {
    mfippa::log_error_with_context!(error, "Failed to load configuration");
    eprintln!("❌ Failed to load configuration");
    eprintln!("   Error: {error}");
    Ok(2)
}
