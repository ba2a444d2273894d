//! PDF text source. Decoding problems never reach the caller: they are logged
//! and turned into an empty string, which the extractors handle.

use std::path::Path;

use tracing::{debug, warn};

use crate::errors::ParserError;

/// Decoded text of the PDF at `path`, or "" if it cannot be read or holds no text layer.
pub async fn extract_text(path: &Path) -> String {
    match read_text(path).await {
        Ok(text) if text.trim().is_empty() => {
            warn!(path = %path.display(), "no text extracted from PDF");
            String::new()
        }
        Ok(text) => {
            debug!(path = %path.display(), chars = text.chars().count(), "PDF text extracted");
            text
        }
        Err(e) => {
            warn!(path = %path.display(), code = e.code(), "error extracting text from PDF: {e}");
            String::new()
        }
    }
}

async fn read_text(path: &Path) -> Result<String, ParserError> {
    let bytes = tokio::fs::read(path).await?;

    // pdf-extract is CPU bound and can panic on hostile input; keep it off the runtime.
    tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ParserError::Decode(e.to_string()))
    })
    .await
    .map_err(|e| ParserError::Decode(format!("PDF decode task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_missing_file_yields_empty_text() {
        let text = extract_text(Path::new("/definitely/not/here/resume.pdf")).await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_non_pdf_bytes_yield_empty_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a pdf at all").unwrap();

        let text = extract_text(file.path()).await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_read_text_reports_io_error() {
        let err = read_text(Path::new("/definitely/not/here/resume.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ParserError::Io(_)));
    }
}
