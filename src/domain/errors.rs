//! Domain error types
//!
//! This module defines the error hierarchy for the checker. All errors are
//! domain-specific and don't expose third-party types.

use std::path::PathBuf;
use thiserror::Error;

/// Main checker error type
///
/// This is the primary error type used throughout the library.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rule library errors (invalid regex, duplicate ids, bad severity)
    #[error("Rule library error: {0}")]
    Rules(String),

    /// Document intake errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Document intake errors
///
/// Raised while turning pasted text, stdin or a file into a scannable
/// document.
#[derive(Debug, Error)]
pub enum InputError {
    /// Nothing to analyze
    #[error("Please enter some text to analyze")]
    EmptyDocument,

    /// File does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Extension is not one of the accepted document types
    #[error("Unsupported file type '{0}'. Supported types: txt, text, md, log, pdf")]
    UnsupportedFormat(String),

    /// Word documents are accepted by the uploader but not parsed
    #[error("DOCX parsing is not supported. Please paste the document text instead")]
    DocxNotSupported,

    /// File exists but could not be read (permissions, directory, I/O failure)
    #[error("Error reading file {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// Text file is not valid UTF-8
    #[error("Error reading file {}: content is not valid UTF-8", .0.display())]
    InvalidEncoding(PathBuf),

    /// PDF text extraction failed
    #[error("Failed to extract text from PDF: {0}")]
    PdfExtraction(String),

    /// Input exceeds the configured size limit
    ///
    /// For files `size` is the length on disk. For standard input it is the
    /// number of bytes received before the stream ended.
    #[error("Document is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
}

impl CheckerError {
    /// Whether this error stems from the document rather than the tool setup
    pub fn is_input_error(&self) -> bool {
        matches!(self, CheckerError::Input(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for CheckerError {
    fn from(err: std::io::Error) -> Self {
        CheckerError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CheckerError {
    fn from(err: serde_json::Error) -> Self {
        CheckerError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CheckerError {
    fn from(err: toml::de::Error) -> Self {
        CheckerError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_error_display() {
        let err = CheckerError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_input_error_conversion() {
        let err: CheckerError = InputError::EmptyDocument.into();
        assert!(matches!(err, CheckerError::Input(InputError::EmptyDocument)));
        assert!(err.is_input_error());
        assert_eq!(
            err.to_string(),
            "Input error: Please enter some text to analyze"
        );
    }

    #[test]
    fn test_too_large_message() {
        let err = InputError::TooLarge {
            size: 2048,
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "Document is 2048 bytes, exceeding the 1024 byte limit"
        );
    }

    #[test]
    fn test_unsupported_format_lists_every_extension() {
        let err = InputError::UnsupportedFormat("exe".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported file type 'exe'. Supported types: txt, text, md, log, pdf"
        );
    }

    #[test]
    fn test_unreadable_is_input_error() {
        let err: CheckerError = InputError::Unreadable {
            path: PathBuf::from("minutes.txt"),
            reason: "is a directory".to_string(),
        }
        .into();
        assert!(err.is_input_error());
        assert_eq!(
            err.to_string(),
            "Input error: Error reading file minutes.txt: is a directory"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: CheckerError = io_err.into();
        assert!(matches!(err, CheckerError::Io(_)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CheckerError = json_err.into();
        assert!(matches!(err, CheckerError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: CheckerError = toml_err.into();
        assert!(matches!(err, CheckerError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_checker_error_implements_std_error() {
        let err = CheckerError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
