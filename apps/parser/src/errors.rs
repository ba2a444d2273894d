use thiserror::Error;

use crate::llm_client::LlmError;

/// Parser-level error type.
///
/// None of these escape `ResumeParser`: every variant has a degraded output
/// (empty text, heuristic fallback) and is only surfaced through logs.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("PDF decode error: {0}")]
    Decode(String),

    #[error("Extraction service error: {0}")]
    Service(#[from] LlmError),

    #[error("Malformed extraction response: {0}")]
    MalformedResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParserError {
    /// Short machine-readable code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            ParserError::Decode(_) => "DECODE_FAILURE",
            ParserError::Service(_) => "SERVICE_FAILURE",
            ParserError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            ParserError::Io(_) => "IO_ERROR",
        }
    }
}
