//! Batch extraction pipeline
//!
//! ```text
//! files ─► BatchLimits::validate ─► BatchOrchestrator (sequential)
//!                                     │ per file:
//!                                     ├─ size check
//!                                     ├─ resolver::resolve
//!                                     └─ DocumentExtractor::extract
//!                                             └─ clean_text
//!                                   ─► BatchSummary / ExtractionResponse
//! ```
//!
//! Request-level problems surface as [`BatchRejection`]; everything that
//! goes wrong with a single file is an [`ExtractionError`] recorded in that
//! file's [`ExtractionResult`].

mod batch;
mod cleaner;
mod error;
mod extractor;
pub mod resolver;
mod summary;
mod types;
mod validation;

pub use batch::BatchOrchestrator;
pub use cleaner::{clean_text, CleanOptions, MIN_READABLE_RATIO};
pub use error::ExtractionError;
pub use extractor::{DocumentExtractor, Extraction, ExtractorOptions};
pub use types::{BatchSummary, ExtractionResponse, ExtractionResult, UploadedFile};
pub use validation::{BatchLimits, BatchRejection, DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_SIZE};
