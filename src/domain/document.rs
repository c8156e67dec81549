//! Document model
//!
//! The text under analysis together with where it came from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// File formats the uploader recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// UTF-8 text (`txt`, `text`, `md`, `log`)
    PlainText,
    /// Portable Document Format
    Pdf,
    /// Word document (recognised, not parsed)
    Docx,
}

impl DocumentFormat {
    /// Infer the format from a file extension, case-insensitively
    ///
    /// Returns `None` for extensions the tool does not accept.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" | "text" | "md" | "log" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Infer the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Where the document text came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentSource {
    /// Pasted on the command line
    Inline,
    /// Piped through standard input
    Stdin,
    /// Read from a file
    File {
        path: PathBuf,
        format: DocumentFormat,
    },
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => write!(f, "pasted text"),
            Self::Stdin => write!(f, "standard input"),
            Self::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

/// Text submitted for analysis
#[derive(Debug, Clone)]
pub struct Document {
    /// Origin of the text
    pub source: DocumentSource,
    /// Full document text
    pub text: String,
}

impl Document {
    /// Create a new document
    pub fn new(source: DocumentSource, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }

    /// Document length in characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the document has no non-whitespace content
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_extension("TXT"),
            Some(DocumentFormat::PlainText)
        );
        assert_eq!(DocumentFormat::from_extension("pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("Docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension("exe"), None);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("/tmp/policy.draft.PDF")),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_char_count_is_not_byte_count() {
        let doc = Document::new(DocumentSource::Inline, "café");
        assert_eq!(doc.char_count(), 4);
        assert_eq!(doc.text.len(), 5);
    }

    #[test]
    fn test_blank_document() {
        assert!(Document::new(DocumentSource::Stdin, "  \n\t ").is_blank());
        assert!(!Document::new(DocumentSource::Stdin, " x ").is_blank());
    }

    #[test]
    fn test_source_display() {
        let source = DocumentSource::File {
            path: PathBuf::from("memo.txt"),
            format: DocumentFormat::PlainText,
        };
        assert_eq!(source.to_string(), "memo.txt");
        assert_eq!(DocumentSource::Inline.to_string(), "pasted text");
    }
}
