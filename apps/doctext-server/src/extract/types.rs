//! Batch extraction types
//!
//! Wire shape of the `/extract-text` response. Field names are part of the
//! public contract and are serialized as-is (snake_case).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ExtractionError;
use crate::document::DocumentFormat;

/// One uploaded file, owned by the request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Filename declared by the client
    pub filename: String,
    /// File contents. Empty when the upload exceeded the size limit and was
    /// discarded during intake.
    pub data: Vec<u8>,
    /// Number of bytes the client sent for this file
    pub size: u64,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        let size = data.len() as u64;
        Self {
            filename: filename.into(),
            data,
            size,
        }
    }

    /// A file whose contents were dropped because it crossed the size limit
    pub fn oversized(filename: impl Into<String>, size: u64) -> Self {
        Self {
            filename: filename.into(),
            data: Vec::new(),
            size,
        }
    }
}

/// Per-file outcome
///
/// Exactly one of `text` and `error` is set; use [`ExtractionResult::success`]
/// and [`ExtractionResult::failure`] to build one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub filename: String,
    pub text: Option<String>,
    pub error: Option<String>,
    pub format: Option<String>,
    pub pages: Option<usize>,
    pub file_size: u64,
}

impl ExtractionResult {
    pub fn success(
        filename: impl Into<String>,
        format: DocumentFormat,
        text: String,
        pages: usize,
        file_size: u64,
    ) -> Self {
        Self {
            filename: filename.into(),
            text: Some(text),
            error: None,
            format: Some(format.as_str().to_string()),
            pages: Some(pages),
            file_size,
        }
    }

    pub fn failure(
        filename: impl Into<String>,
        format: Option<DocumentFormat>,
        error: &ExtractionError,
        file_size: u64,
    ) -> Self {
        Self {
            filename: filename.into(),
            text: None,
            error: Some(error.to_string()),
            format: format.map(|f| f.as_str().to_string()),
            pages: None,
            file_size,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate statistics for one batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Successful files per format name
    pub formats_processed: BTreeMap<String, usize>,
}

/// Response envelope for one accepted batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    /// The request was well-formed and every file was processed. Per-file
    /// outcomes are reported in `documents`.
    pub success: bool,
    pub documents: Vec<ExtractionResult>,
    pub summary: BatchSummary,
}
