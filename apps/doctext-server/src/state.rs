//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::document::DocumentBackend;
use crate::extract::{BatchOrchestrator, DocumentExtractor};
use crate::mupdf::MupdfBackend;

/// Shared application state
///
/// Immutable after startup; every request gets a cheap clone.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    orchestrator: BatchOrchestrator,
}

impl AppState {
    /// State backed by MuPDF
    pub fn new(config: Config) -> Self {
        Self::with_backend(config, Arc::new(MupdfBackend::new()))
    }

    /// State backed by an arbitrary document backend
    pub fn with_backend(config: Config, backend: Arc<dyn DocumentBackend>) -> Self {
        let extractor = DocumentExtractor::new(backend, config.extractor_options());
        let orchestrator = BatchOrchestrator::new(extractor, config.batch_limits());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                orchestrator,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the batch orchestrator
    pub fn orchestrator(&self) -> &BatchOrchestrator {
        &self.inner.orchestrator
    }
}
