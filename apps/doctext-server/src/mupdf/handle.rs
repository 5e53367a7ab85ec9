//! Open MuPDF document handle

use mupdf::Document;

use crate::document::{BackendError, DocumentHandle, Result};

/// An open MuPDF document
///
/// Dropping the inner [`Document`] releases the `fz_document`; `close`
/// does that eagerly so the memory is returned before the next file is
/// opened.
pub struct MupdfHandle {
    document: Option<Document>,
}

impl MupdfHandle {
    pub(super) fn new(document: Document) -> Self {
        Self {
            document: Some(document),
        }
    }

    fn document(&self) -> std::result::Result<&Document, String> {
        self.document
            .as_ref()
            .ok_or_else(|| "document already closed".to_string())
    }
}

impl DocumentHandle for MupdfHandle {
    fn page_count(&self) -> Result<usize> {
        let document = self.document().map_err(BackendError::PageCount)?;
        let count = document
            .page_count()
            .map_err(|e| BackendError::PageCount(e.to_string()))?;

        usize::try_from(count)
            .map_err(|_| BackendError::PageCount(format!("negative page count {}", count)))
    }

    fn page_text(&self, index: usize) -> Result<String> {
        let page_error = |message: String| BackendError::PageText { index, message };

        let document = self.document().map_err(page_error)?;
        let page_number = i32::try_from(index)
            .map_err(|_| page_error(format!("page index {} out of range", index)))?;

        let count = document
            .page_count()
            .map_err(|e| page_error(e.to_string()))?;
        if page_number >= count {
            return Err(page_error(format!(
                "page index {} out of range (document has {} pages)",
                index, count
            )));
        }

        let page = document
            .load_page(page_number)
            .map_err(|e| page_error(e.to_string()))?;
        page.to_text().map_err(|e| page_error(e.to_string()))
    }

    fn close(&mut self) {
        if self.document.take().is_some() {
            tracing::trace!("Closed document");
        }
    }
}
