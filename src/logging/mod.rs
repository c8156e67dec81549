//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console logs on stderr so reports on stdout stay clean
//! - Configurable log levels (`RUST_LOG` takes precedence)
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use mfippa::logging::init_logging;
//! use mfippa::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Checker started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a scan
///
/// # Example
///
/// ```no_run
/// use mfippa::log_scan_start;
/// use mfippa::domain::DocumentSource;
///
/// log_scan_start!(DocumentSource::Inline, 7);
/// ```
#[macro_export]
macro_rules! log_scan_start {
    ($source:expr, $rules:expr) => {
        tracing::info!(
            source = %$source,
            rules = $rules,
            "Starting scan"
        );
    };
}

/// Log the completion of a scan
///
/// # Example
///
/// ```no_run
/// use mfippa::log_scan_complete;
/// use std::time::Duration;
///
/// log_scan_complete!(3, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_scan_complete {
    ($findings:expr, $duration:expr) => {
        tracing::info!(
            findings = $findings,
            duration_ms = $duration.as_millis() as u64,
            "Scan completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use mfippa::log_error_with_context;
/// use mfippa::domain::CheckerError;
///
/// let error = CheckerError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::{CheckerError, DocumentSource};
    use std::time::Duration;

    #[test]
    fn test_macros_expand_without_subscriber() {
        log_scan_start!(DocumentSource::Stdin, 7usize);
        log_scan_complete!(2usize, Duration::from_millis(5));
        log_error_with_context!(CheckerError::Other("boom".into()), "while testing");
    }
}
