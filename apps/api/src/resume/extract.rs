//! PDF → plain text. A single attempt: malformed input does not become
//! parseable by trying again.

use bytes::Bytes;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("the document could not be parsed as a PDF: {0}")]
    Unreadable(String),

    #[error("no text could be extracted from the document")]
    NoText,

    #[error("the PDF parser aborted")]
    ParserAborted,
}

/// Returns the text of every page, in page order.
pub fn extract_text(pdf: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(pdf)
        .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }

    Ok(text)
}

/// Runs `extract_text` on the blocking pool. A panic inside the PDF parser
/// is reported as `ParserAborted` instead of taking the worker down.
pub async fn extract_text_blocking(pdf: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text(&pdf))
        .await
        .map_err(|e| {
            warn!("PDF extraction task failed: {e}");
            ExtractionError::ParserAborted
        })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_pdf_bytes_fail() {
        let result =
            extract_text_blocking(Bytes::from_static(b"PK\x03\x04 this is a zip file, not a pdf")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_input_fails() {
        assert!(extract_text_blocking(Bytes::new()).await.is_err());
    }

    #[tokio::test]
    async fn test_truncated_pdf_fails() {
        let result = extract_text_blocking(Bytes::from_static(b"%PDF-1.4 truncated")).await;
        assert!(result.is_err());
    }
}
