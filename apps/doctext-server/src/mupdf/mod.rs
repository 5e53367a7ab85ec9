//! MuPDF document backend
//!
//! Production implementation of [`DocumentBackend`]. MuPDF handles every
//! supported container format through one API, so a single backend covers
//! PDF, XPS, EPUB, MOBI, FB2 and CBZ.
//!
//! # Thread Safety
//!
//! MuPDF's `fz_context` is **NOT thread-safe**. Each call to
//! [`MupdfBackend::open`] creates a fresh document, and the returned handle
//! never leaves the thread that opened it. The backend itself holds no
//! state and is shared freely between requests.
//!
//! Reflowable formats (EPUB, MOBI, FB2) are paginated with MuPDF's default
//! layout, so their page count depends on that layout rather than on the
//! source file.

mod handle;

use mupdf::Document;

use crate::document::{BackendError, DocumentBackend, DocumentFormat, DocumentHandle, Result};

pub use handle::MupdfHandle;

/// MuPDF-based implementation of [`DocumentBackend`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentBackend for MupdfBackend {
    fn open(&self, data: &[u8], format: DocumentFormat) -> Result<Box<dyn DocumentHandle>> {
        let document = Document::from_bytes(data, format.magic())
            .map_err(|e| BackendError::Open(e.to_string()))?;

        tracing::trace!(format = %format, bytes = data.len(), "Opened document");

        Ok(Box::new(MupdfHandle::new(document)))
    }
}
