//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "mfippa.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing MFIPPA Compliance Checker configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Write to file
        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: mfippa validate-config");
                println!("  3. Review the active rules: mfippa rules");
                println!("  4. Scan a document: mfippa scan --file minutes.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# MFIPPA Compliance Checker Configuration
#
# Every setting is optional; the values below are the defaults.
# Any value can be overridden with MFIPPA_<SECTION>_<KEY>, for example
# MFIPPA_REPORT_FORMAT=json. Use ${VAR_NAME} to read a value from the
# environment.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Scan Settings
# ============================================================================
[scan]
# Matched spans kept per rule before duplicates are removed (1-100)
max_matches_per_rule = 5

# Largest document accepted, in bytes
max_document_bytes = 10485760

# Custom rule library (built-in MFIPPA rules when unset)
# rule_library = "rules/custom.toml"

# ============================================================================
# Report Settings
# ============================================================================
[report]
# Default output format: console, json, or markdown
format = "console"

# Colour-code severities in console output
color = true

# ============================================================================
# Audit Trail
# ============================================================================
[audit]
# Record each scan; matched text is stored only as SHA-256 hashes
enabled = false
log_path = "./audit/scans.log"
json_format = true

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Write JSON logs to local files in addition to stderr
local_enabled = false
local_path = "./logs"

# Log rotation (daily, hourly, or never)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckerConfig;
    use tempfile::tempdir;

    #[test]
    fn test_generated_config_parses_and_validates() {
        let config: CheckerConfig = toml::from_str(&InitArgs::generate_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.scan.max_matches_per_rule, 5);
        assert!(config.scan.rule_library.is_none());
        assert!(!config.audit.enabled);
    }

    #[tokio::test]
    async fn test_init_writes_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("mfippa.toml");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("mfippa.toml");
        fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[scan]"));
    }
}
