//! File-level extraction errors
//!
//! Everything here is isolated to a single file: the orchestrator turns it
//! into a failed [`ExtractionResult`](super::ExtractionResult) and moves on.

use thiserror::Error;

use crate::document::BackendError;

/// Why one file produced no text
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("file too large: {size} bytes exceeds the limit of {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    #[error("unsupported format")]
    UnsupportedFormat,

    #[error("corrupt or unreadable document: {0}")]
    CorruptDocument(String),

    #[error("text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("no readable text content found in document")]
    EmptyResult,

    #[error("internal error while processing file: {0}")]
    Internal(String),
}

impl ExtractionError {
    /// Stable machine-readable code, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            Self::CorruptDocument(_) => "CORRUPT_DOCUMENT",
            Self::ExtractionFailed(_) => "EXTRACTION_FAILED",
            Self::EmptyResult => "EMPTY_RESULT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<BackendError> for ExtractionError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Open(message) => Self::CorruptDocument(message),
            other => Self::ExtractionFailed(other.to_string()),
        }
    }
}
