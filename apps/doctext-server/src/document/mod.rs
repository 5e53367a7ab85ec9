//! Document abstraction
//!
//! Format-agnostic interface to the parsing library. The pipeline only
//! ever sees [`DocumentBackend`] and [`DocumentHandle`]; MuPDF lives behind
//! them in [`crate::mupdf`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              DocumentExtractor               │
//! │   (page loop, text cleaning, error mapping)  │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │   OpenDocument (closes handle on drop)       │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │   dyn DocumentBackend  →  dyn DocumentHandle │
//! │          (MupdfBackend in production)        │
//! └──────────────────────────────────────────────┘
//! ```

mod error;
#[cfg(test)]
pub(crate) mod mock;
mod traits;
mod types;

pub use error::{BackendError, Result};
pub use traits::{DocumentBackend, DocumentHandle, OpenDocument};
pub use types::DocumentFormat;
