//! Mock document backend for testing.
//!
//! Documents are scripted in their own bytes: [`MockBackend::document`]
//! encodes a list of page texts, and a few sentinel pages trigger failures.
//! The backend counts opens and closes so tests can assert that every
//! handle is released.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::{BackendError, DocumentBackend, DocumentFormat, DocumentHandle, Result};

const HEADER: &str = "MOCKDOC\n";
const PAGE_SEPARATOR: char = '\u{1e}';

/// Page text that makes `page_text` fail
pub const FAIL_PAGE: &str = "!fail";
/// Page text that makes `page_text` panic
pub const PANIC_PAGE: &str = "!panic";
/// Page text that makes `page_text` block for [`SLOW_PAGE_DELAY`]
pub const SLOW_PAGE: &str = "!slow";
pub const SLOW_PAGE_DELAY: std::time::Duration = std::time::Duration::from_millis(1500);

#[derive(Default)]
struct Counters {
    opened: AtomicUsize,
    closed: AtomicUsize,
}

/// A hand-rolled mock implementing [`DocumentBackend`] for tests.
#[derive(Clone, Default)]
pub struct MockBackend {
    counters: Arc<Counters>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a document whose pages have the given texts
    pub fn document(pages: &[&str]) -> Vec<u8> {
        let mut data = String::from(HEADER);
        data.push_str(&pages.join(&PAGE_SEPARATOR.to_string()));
        data.into_bytes()
    }

    /// Number of handles opened so far
    pub fn opened(&self) -> usize {
        self.counters.opened.load(Ordering::SeqCst)
    }

    /// Number of handles closed so far
    pub fn closed(&self) -> usize {
        self.counters.closed.load(Ordering::SeqCst)
    }
}

impl DocumentBackend for MockBackend {
    fn open(&self, data: &[u8], _format: DocumentFormat) -> Result<Box<dyn DocumentHandle>> {
        let text = std::str::from_utf8(data)
            .map_err(|_| BackendError::Open("not a mock document".into()))?;
        let body = text
            .strip_prefix(HEADER)
            .ok_or_else(|| BackendError::Open("missing mock header".into()))?;

        let pages = if body.is_empty() {
            Vec::new()
        } else {
            body.split(PAGE_SEPARATOR).map(str::to_string).collect()
        };

        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockHandle {
            pages,
            counters: Arc::clone(&self.counters),
            closed: false,
        }))
    }
}

struct MockHandle {
    pages: Vec<String>,
    counters: Arc<Counters>,
    closed: bool,
}

impl DocumentHandle for MockHandle {
    fn page_count(&self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn page_text(&self, index: usize) -> Result<String> {
        let page = self.pages.get(index).ok_or_else(|| BackendError::PageText {
            index,
            message: "page out of range".into(),
        })?;

        match page.as_str() {
            FAIL_PAGE => Err(BackendError::PageText {
                index,
                message: "scripted failure".into(),
            }),
            PANIC_PAGE => panic!("scripted panic on page {index}"),
            SLOW_PAGE => {
                std::thread::sleep(SLOW_PAGE_DELAY);
                Ok("slow".to_string())
            }
            text => Ok(text.to_string()),
        }
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.counters.closed.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::OpenDocument;

    #[test]
    fn test_scripted_pages() {
        let backend = MockBackend::new();
        let data = MockBackend::document(&["one", "two"]);

        {
            let doc = OpenDocument::open(&backend, &data, DocumentFormat::Pdf).unwrap();
            assert_eq!(doc.page_count().unwrap(), 2);
            assert_eq!(doc.page_text(1).unwrap(), "two");
            assert_eq!(backend.opened(), 1);
            assert_eq!(backend.closed(), 0);
        }

        assert_eq!(backend.closed(), 1);
    }

    #[test]
    fn test_rejects_foreign_bytes() {
        let backend = MockBackend::new();
        let result = backend.open(b"%PDF-1.4 garbage", DocumentFormat::Pdf);
        assert!(matches!(result, Err(BackendError::Open(_))));
        assert_eq!(backend.opened(), 0);
    }
}
