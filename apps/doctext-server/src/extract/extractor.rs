//! Single-document text extraction

use std::sync::Arc;

use super::cleaner::{clean_text, CleanOptions};
use super::error::ExtractionError;
use crate::document::{DocumentBackend, DocumentFormat, OpenDocument};

/// Extraction policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractorOptions {
    pub clean: CleanOptions,
    /// Report a document with no readable text as a failure
    pub empty_text_is_error: bool,
}

/// Text and page count of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub pages: usize,
}

/// Opens a document, reads every page and cleans the result
#[derive(Clone)]
pub struct DocumentExtractor {
    backend: Arc<dyn DocumentBackend>,
    options: ExtractorOptions,
}

impl DocumentExtractor {
    pub fn new(backend: Arc<dyn DocumentBackend>, options: ExtractorOptions) -> Self {
        Self { backend, options }
    }

    pub fn options(&self) -> ExtractorOptions {
        self.options
    }

    /// Extract the text of `data`, already resolved to `format`
    ///
    /// The document is closed before this returns, whatever the outcome.
    pub fn extract(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<Extraction, ExtractionError> {
        if data.is_empty() {
            return Err(ExtractionError::CorruptDocument("file is empty".into()));
        }

        // The document is dropped at the end of this block, before cleaning
        let (raw, pages) = {
            let document = OpenDocument::open(self.backend.as_ref(), data, format)?;
            let pages = document.page_count()?;

            let mut raw = String::new();
            for index in 0..pages {
                let page_text = document.page_text(index)?;
                if page_text.trim().is_empty() {
                    continue;
                }
                if !raw.is_empty() {
                    raw.push('\n');
                }
                raw.push_str(&page_text);
            }

            (raw, pages)
        };

        let text = clean_text(&raw, self.options.clean);
        if text.is_empty() && self.options.empty_text_is_error {
            return Err(ExtractionError::EmptyResult);
        }

        Ok(Extraction { text, pages })
    }
}
