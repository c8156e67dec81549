//! Document intake
//!
//! Turns pasted text, standard input, or an uploaded file into a
//! [`Document`]. Plain text files must be UTF-8; PDFs go through
//! [`pdf`] text extraction; Word documents are recognised but declined.
//!
//! # Example
//!
//! ```no_run
//! use mfippa::input;
//!
//! # async fn example() -> mfippa::domain::Result<()> {
//! let document = input::read_file("minutes.txt", 10 * 1024 * 1024).await?;
//! println!("{} characters from {}", document.char_count(), document.source);
//! # Ok(())
//! # }
//! ```

pub mod pdf;

use crate::domain::{Document, DocumentFormat, DocumentSource, InputError, Result};
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Label used for standard input in error messages
const STDIN_LABEL: &str = "<stdin>";

/// Build a document from pasted text
pub fn read_inline(text: impl Into<String>) -> Document {
    Document::new(DocumentSource::Inline, text)
}

/// Read all of standard input
///
/// Input longer than `max_bytes` is rejected with [`InputError::TooLarge`].
pub async fn read_stdin(max_bytes: u64) -> Result<Document> {
    let text = read_text(tokio::io::stdin(), max_bytes).await?;

    tracing::debug!(bytes = text.len(), "Read document from stdin");
    Ok(Document::new(DocumentSource::Stdin, text))
}

/// Read a stream to the end as UTF-8, holding at most `max_bytes + 1` bytes
async fn read_text<R>(
    mut reader: R,
    max_bytes: u64,
) -> std::result::Result<String, InputError>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = Vec::new();
    (&mut reader)
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut buffer)
        .await
        .map_err(|e| stdin_unreadable(&e))?;

    if buffer.len() as u64 > max_bytes {
        // Drain the rest so the reported size is the real one
        let rest = tokio::io::copy(&mut reader, &mut tokio::io::sink())
            .await
            .map_err(|e| stdin_unreadable(&e))?;
        return Err(InputError::TooLarge {
            size: buffer.len() as u64 + rest,
            limit: max_bytes,
        });
    }

    String::from_utf8(buffer).map_err(|_| InputError::InvalidEncoding(STDIN_LABEL.into()))
}

fn stdin_unreadable(err: &std::io::Error) -> InputError {
    InputError::Unreadable {
        path: STDIN_LABEL.into(),
        reason: err.to_string(),
    }
}

fn unreadable(path: &Path, err: &std::io::Error) -> InputError {
    InputError::Unreadable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

/// Read a document from a file
///
/// The format is inferred from the extension. Size is checked before the
/// file is read.
pub async fn read_file(path: impl AsRef<Path>, max_bytes: u64) -> Result<Document> {
    let path = path.as_ref();

    // Check the file exists and is a regular file
    let metadata = match tokio::fs::metadata(path).await {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(InputError::NotFound(path.to_path_buf()).into());
        }
        Err(e) => return Err(unreadable(path, &e).into()),
    };
    if !metadata.is_file() {
        return Err(InputError::Unreadable {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_bytes {
        return Err(InputError::TooLarge {
            size: metadata.len(),
            limit: max_bytes,
        }
        .into());
    }

    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        InputError::UnsupportedFormat(extension)
    })?;
    if format == DocumentFormat::Docx {
        return Err(InputError::DocxNotSupported.into());
    }

    let bytes = tokio::fs::read(path).await.map_err(|e| unreadable(path, &e))?;

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_text(bytes).await?,
        _ => String::from_utf8(bytes)
            .map_err(|_| InputError::InvalidEncoding(path.to_path_buf()))?,
    };

    tracing::debug!(
        path = %path.display(),
        format = ?format,
        bytes = metadata.len(),
        "Read document from file"
    );

    Ok(Document::new(
        DocumentSource::File {
            path: path.to_path_buf(),
            format,
        },
        text,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CheckerError;
    use std::io::Write;

    fn temp_with_suffix(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_inline() {
        let doc = read_inline("hello");
        assert_eq!(doc.source, DocumentSource::Inline);
        assert_eq!(doc.text, "hello");
    }

    #[tokio::test]
    async fn test_read_text_file() {
        let file = temp_with_suffix(".txt", "Her DOB is 1990-01-01".as_bytes());
        let doc = read_file(file.path(), 1024).await.unwrap();

        assert_eq!(doc.text, "Her DOB is 1990-01-01");
        assert!(matches!(
            doc.source,
            DocumentSource::File {
                format: DocumentFormat::PlainText,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_uppercase_extension() {
        let file = temp_with_suffix(".TXT", b"notice");
        assert!(read_file(file.path(), 1024).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = read_file("/nonexistent/memo.txt", 1024).await;
        assert!(matches!(
            result,
            Err(CheckerError::Input(InputError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8() {
        let file = temp_with_suffix(".txt", &[0xff, 0xfe, 0xfd]);
        let result = read_file(file.path(), 1024).await;
        assert!(matches!(
            result,
            Err(CheckerError::Input(InputError::InvalidEncoding(_)))
        ));
    }

    #[tokio::test]
    async fn test_docx_declined() {
        let file = temp_with_suffix(".docx", b"PK\x03\x04");
        let result = read_file(file.path(), 1024).await;
        assert!(matches!(
            result,
            Err(CheckerError::Input(InputError::DocxNotSupported))
        ));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let file = temp_with_suffix(".exe", b"MZ");
        let result = read_file(file.path(), 1024).await;
        match result {
            Err(CheckerError::Input(InputError::UnsupportedFormat(ext))) => assert_eq!(ext, "exe"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minutes.txt");
        std::fs::create_dir(&path).unwrap();

        let result = read_file(&path, 1024).await;
        assert!(matches!(
            result,
            Err(CheckerError::Input(InputError::Unreadable { .. }))
        ));
    }

    #[tokio::test]
    async fn test_stream_within_limit() {
        let text = read_text(&b"Her DOB is 1990-01-01"[..], 64).await.unwrap();
        assert_eq!(text, "Her DOB is 1990-01-01");
    }

    #[tokio::test]
    async fn test_stream_exactly_at_limit() {
        let text = read_text(&[b'a'; 16][..], 16).await.unwrap();
        assert_eq!(text.len(), 16);
    }

    #[tokio::test]
    async fn test_stream_too_large_reports_full_size() {
        let result = read_text(&[b'a'; 64][..], 16).await;
        assert!(matches!(
            result,
            Err(InputError::TooLarge { size: 64, limit: 16 })
        ));
    }

    #[tokio::test]
    async fn test_stream_invalid_utf8() {
        let result = read_text(&[0xff, 0xfe, 0xfd][..], 16).await;
        match result {
            Err(InputError::InvalidEncoding(label)) => {
                assert_eq!(label, std::path::PathBuf::from("<stdin>"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_too_large() {
        let file = temp_with_suffix(".txt", &[b'a'; 64]);
        let result = read_file(file.path(), 16).await;
        assert!(matches!(
            result,
            Err(CheckerError::Input(InputError::TooLarge { size: 64, limit: 16 }))
        ));
    }
}
