//! Document backend error types

use thiserror::Error;

/// Failure reported by a document parsing backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// The byte stream could not be opened as a document
    #[error("failed to open document: {0}")]
    Open(String),

    /// The document opened but its page count could not be read
    #[error("failed to count pages: {0}")]
    PageCount(String),

    /// Text could not be extracted from one page
    #[error("failed to extract text from page {index}: {message}")]
    PageText { index: usize, message: String },
}

/// Result type alias for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;
