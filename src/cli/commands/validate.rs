//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the checker configuration and the rule library it points to.

use crate::config::{load_or_default, DEFAULT_CONFIG_FILE};
use crate::scanner::ScanEngine;
use clap::Args;
use std::path::Path;

/// Label shown when no configuration file is in play
const DEFAULT_SOURCE_LABEL: &str = "built-in defaults";

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let source = config_source(config_path, Path::new(DEFAULT_CONFIG_FILE).exists());
        tracing::info!(config_source = %source, "Validating configuration");

        if source == DEFAULT_SOURCE_LABEL {
            println!("🔍 Validating configuration: {source}");
        } else {
            println!("🔍 Validating configuration file: {source}");
        }
        println!();

        // Load configuration
        let config = match load_or_default(config_path) {
            Ok(c) => {
                println!("✅ Configuration loaded and validated successfully");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Compile the rule library
        let engine = match ScanEngine::new(config.scan.clone()) {
            Ok(engine) => {
                println!("✅ Rule library compiled successfully");
                engine
            }
            Err(e) => {
                println!("❌ Rule library failed to load");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        match config.scan.rule_library {
            Some(ref path) => println!("  Rule Library: {}", path.display()),
            None => println!("  Rule Library: built-in"),
        }
        println!("  Statute: {}", engine.registry().statute());
        println!("  Rules: {}", engine.registry().len());
        println!("  Matches per Rule: {}", config.scan.max_matches_per_rule);
        println!("  Max Document Size: {} bytes", config.scan.max_document_bytes);
        println!("  Report Format: {}", config.report.format);
        println!("  Colour Output: {}", config.report.color);
        if config.audit.enabled {
            println!("  Audit Log: {}", config.audit.log_path.display());
        } else {
            println!("  Audit Log: disabled");
        }
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();

        Ok(0)
    }
}

/// Describe where the configuration comes from, mirroring `load_or_default`
fn config_source(config_path: Option<&str>, fallback_exists: bool) -> String {
    match config_path {
        Some(path) => path.to_string(),
        None if fallback_exists => DEFAULT_CONFIG_FILE.to_string(),
        None => DEFAULT_SOURCE_LABEL.to_string(),
    }
}
