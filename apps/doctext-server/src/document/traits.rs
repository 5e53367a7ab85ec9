//! Document traits
//!
//! The seam between the extraction pipeline and the parsing library.

use super::error::Result;
use super::types::DocumentFormat;

/// Opens raw bytes as a document
///
/// Implementations are stateless factories shared across requests; all
/// per-document state lives in the returned handle.
pub trait DocumentBackend: Send + Sync {
    /// Open `data` as a document of the given format
    fn open(&self, data: &[u8], format: DocumentFormat) -> Result<Box<dyn DocumentHandle>>;
}

/// An open document
///
/// Handles are used from a single thread and must be closed before the
/// next document is opened. Use [`OpenDocument`] to get that for free.
pub trait DocumentHandle {
    /// Number of pages (or reflowed units for EPUB, MOBI, FB2)
    fn page_count(&self) -> Result<usize>;

    /// Raw text of one page, zero-based
    fn page_text(&self, index: usize) -> Result<String>;

    /// Release the underlying document. Must be idempotent.
    fn close(&mut self);
}

/// Scoped document handle
///
/// Closes the wrapped handle when dropped, so the document is released on
/// normal return, on early `?` return and while unwinding from a panic.
pub struct OpenDocument {
    handle: Box<dyn DocumentHandle>,
}

impl OpenDocument {
    /// Open a document through `backend` and take ownership of the handle
    pub fn open(
        backend: &dyn DocumentBackend,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<Self> {
        let handle = backend.open(data, format)?;
        Ok(Self { handle })
    }

    pub fn page_count(&self) -> Result<usize> {
        self.handle.page_count()
    }

    pub fn page_text(&self, index: usize) -> Result<String> {
        self.handle.page_text(index)
    }
}

impl Drop for OpenDocument {
    fn drop(&mut self) {
        self.handle.close();
    }
}
