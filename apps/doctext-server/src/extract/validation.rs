//! Batch validation
//!
//! Request-level checks reject the whole batch before any extraction runs.
//! The per-file size check is deliberately not one of them: an oversized
//! file fails on its own and its siblings are still processed.

use thiserror::Error;

use super::error::ExtractionError;
use super::types::UploadedFile;

/// Default per-file size limit in bytes
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50_000_000;

/// Default number of files per request
pub const DEFAULT_MAX_FILES: usize = 50;

/// Why a whole batch was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchRejection {
    #[error("No files provided")]
    NoFiles,

    #[error("Too many files: maximum {max} files allowed per request")]
    TooManyFiles { max: usize },
}

/// Size and count limits, read once from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimits {
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for BatchLimits {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl BatchLimits {
    /// Upper bound on the file count
    ///
    /// Called while the upload is still streaming so the request can be
    /// refused as soon as one file too many shows up.
    pub fn check_count(&self, count: usize) -> Result<(), BatchRejection> {
        if count > self.max_files {
            return Err(BatchRejection::TooManyFiles {
                max: self.max_files,
            });
        }
        Ok(())
    }

    /// Full request-level check on a received batch
    pub fn validate(&self, files: &[UploadedFile]) -> Result<(), BatchRejection> {
        if files.is_empty() {
            return Err(BatchRejection::NoFiles);
        }
        self.check_count(files.len())
    }

    /// Whether a file of `size` bytes may be processed
    pub fn accepts_size(&self, size: u64) -> bool {
        size <= self.max_file_size
    }

    /// Per-file size check
    pub fn check_file_size(&self, file: &UploadedFile) -> Result<(), ExtractionError> {
        if !self.accepts_size(file.size) {
            return Err(ExtractionError::FileTooLarge {
                size: file.size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }
}
