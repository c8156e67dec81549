//! PDF text extraction using pdf-extract

use crate::domain::InputError;

/// Extract the text of every page of a PDF
///
/// Extraction runs on the blocking pool. pdf-extract panics on some
/// malformed page trees (a page without `/Resources`, for one); a panic in
/// the worker is reported as [`InputError::PdfExtraction`] like any other
/// unparseable file.
pub async fn extract_text(pdf_bytes: Vec<u8>) -> Result<String, InputError> {
    match tokio::task::spawn_blocking(move || extract_text_sync(&pdf_bytes)).await {
        Ok(result) => result,
        Err(join_error) => {
            tracing::warn!(error = %join_error, "PDF extraction task failed");
            Err(InputError::PdfExtraction("document could not be parsed".to_string()))
        }
    }
}

fn extract_text_sync(pdf_bytes: &[u8]) -> Result<String, InputError> {
    match pdf_extract::extract_text_from_mem(pdf_bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            let message = e.to_string();
            let lower = message.to_lowercase();

            if lower.contains("encrypted") || lower.contains("password") {
                return Err(InputError::PdfExtraction(
                    "document is password protected".to_string(),
                ));
            }

            Err(InputError::PdfExtraction(message))
        }
    }
}
