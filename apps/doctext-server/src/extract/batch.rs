//! Batch orchestration
//!
//! Files are processed strictly one after another. Parsing libraries for
//! these formats hold a lot of transient memory per open document, so a
//! batch never has more than one document open; latency is traded for a
//! predictable peak. Do not parallelize this loop.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::document::DocumentFormat;

use super::error::ExtractionError;
use super::extractor::DocumentExtractor;
use super::resolver;
use super::types::{ExtractionResponse, ExtractionResult, UploadedFile};
use super::validation::{BatchLimits, BatchRejection};

/// Drives extraction over a whole batch
#[derive(Clone)]
pub struct BatchOrchestrator {
    extractor: DocumentExtractor,
    limits: BatchLimits,
}

impl BatchOrchestrator {
    pub fn new(extractor: DocumentExtractor, limits: BatchLimits) -> Self {
        Self { extractor, limits }
    }

    pub fn limits(&self) -> BatchLimits {
        self.limits
    }

    /// Validate the batch, process every file and build the response
    ///
    /// Blocking: call from a blocking thread.
    pub fn run(&self, files: Vec<UploadedFile>) -> Result<ExtractionResponse, BatchRejection> {
        self.limits.validate(&files)?;

        let total = files.len();
        tracing::info!(files = total, "Processing batch");

        let response = ExtractionResponse::from_results(self.process(files));

        tracing::info!(
            total = response.summary.total,
            successful = response.summary.successful,
            failed = response.summary.failed,
            "Batch processing complete"
        );

        Ok(response)
    }

    /// One result per file, in input order
    ///
    /// Each file's bytes are dropped as soon as it has been processed.
    pub fn process(&self, files: Vec<UploadedFile>) -> Vec<ExtractionResult> {
        files
            .into_iter()
            .map(|file| self.process_file(file))
            .collect()
    }

    /// Process one file. Never fails: every error becomes a failed result.
    pub fn process_file(&self, file: UploadedFile) -> ExtractionResult {
        if let Err(err) = self.limits.check_file_size(&file) {
            return self.failed(&file, None, err);
        }

        let Some(format) = resolver::resolve(&file.filename, &file.data) else {
            return self.failed(&file, None, ExtractionError::UnsupportedFormat);
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.extractor.extract(&file.data, format)
        }))
        .unwrap_or_else(|payload| Err(ExtractionError::Internal(panic_message(payload.as_ref()))));

        match outcome {
            Ok(extraction) => {
                tracing::info!(
                    filename = %file.filename,
                    format = %format,
                    pages = extraction.pages,
                    chars = extraction.text.chars().count(),
                    "Extracted text"
                );
                ExtractionResult::success(
                    file.filename,
                    format,
                    extraction.text,
                    extraction.pages,
                    file.size,
                )
            }
            Err(err) => self.failed(&file, Some(format), err),
        }
    }

    fn failed(
        &self,
        file: &UploadedFile,
        format: Option<DocumentFormat>,
        err: ExtractionError,
    ) -> ExtractionResult {
        tracing::warn!(
            filename = %file.filename,
            code = err.code(),
            error = %err,
            "File extraction failed"
        );
        ExtractionResult::failure(file.filename.clone(), format, &err, file.size)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
