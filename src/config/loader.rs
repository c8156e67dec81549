//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CheckerConfig;
use crate::domain::errors::CheckerError;
use crate::domain::result::Result;
use crate::scanner::render::ReportFormat;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "mfippa.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CheckerConfig
/// 4. Applies environment variable overrides (MFIPPA_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`CheckerError::Configuration`] if the file cannot be read or
/// parsed, a referenced variable is unset, an override does not parse, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use mfippa::config::loader::load_config;
///
/// let config = load_config("mfippa.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CheckerConfig> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(CheckerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        CheckerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: CheckerConfig = toml::from_str(&contents)
        .map_err(|e| CheckerError::Configuration(format!("Failed to parse TOML: {e}")))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config)?;

    // Validate configuration
    config.validate().map_err(|e| {
        CheckerError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads configuration from an explicit path, `./mfippa.toml`, or defaults
///
/// An explicit path must exist. Without one, `mfippa.toml` in the working
/// directory is used when present. Environment overrides apply in every
/// case.
pub fn load_or_default(path: Option<&str>) -> Result<CheckerConfig> {
    if let Some(path) = path {
        return load_config(path);
    }

    let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        tracing::debug!(path = %fallback.display(), "Using configuration from working directory");
        return load_config(fallback);
    }

    let mut config = CheckerConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        CheckerError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| {
        CheckerError::Configuration(format!("Invalid substitution pattern: {e}"))
    })?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        // Leave comment lines as written
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(CheckerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    let mut result = lines.join("\n");
    if input.ends_with('\n') {
        result.push('\n');
    }
    Ok(result)
}

/// Reads and parses an override variable, if set
fn env_override<T: FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(val) => val.trim().parse().map(Some).map_err(|e| {
            CheckerError::Configuration(format!("Invalid value '{val}' for {name}: {e}"))
        }),
        Err(_) => Ok(None),
    }
}

/// Applies environment variable overrides using MFIPPA_* prefix
///
/// Environment variables follow the pattern: MFIPPA_<SECTION>_<KEY>
/// For example: MFIPPA_SCAN_MAX_MATCHES_PER_RULE, MFIPPA_REPORT_FORMAT
fn apply_env_overrides(config: &mut CheckerConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("MFIPPA_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Scan overrides
    if let Some(max) = env_override("MFIPPA_SCAN_MAX_MATCHES_PER_RULE")? {
        config.scan.max_matches_per_rule = max;
    }
    if let Some(bytes) = env_override("MFIPPA_SCAN_MAX_DOCUMENT_BYTES")? {
        config.scan.max_document_bytes = bytes;
    }
    if let Ok(val) = std::env::var("MFIPPA_SCAN_RULE_LIBRARY") {
        config.scan.rule_library = Some(PathBuf::from(val));
    }

    // Report overrides
    if let Some(format) = env_override::<ReportFormat>("MFIPPA_REPORT_FORMAT")? {
        config.report.format = format;
    }
    if let Some(color) = env_override("MFIPPA_REPORT_COLOR")? {
        config.report.color = color;
    }

    // Audit overrides
    if let Some(enabled) = env_override("MFIPPA_AUDIT_ENABLED")? {
        config.audit.enabled = enabled;
    }
    if let Ok(val) = std::env::var("MFIPPA_AUDIT_LOG_PATH") {
        config.audit.log_path = PathBuf::from(val);
    }
    if let Some(json) = env_override("MFIPPA_AUDIT_JSON_FORMAT")? {
        config.audit.json_format = json;
    }

    // Logging overrides
    if let Some(enabled) = env_override("MFIPPA_LOGGING_LOCAL_ENABLED")? {
        config.logging.local_enabled = enabled;
    }
    if let Ok(val) = std::env::var("MFIPPA_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
