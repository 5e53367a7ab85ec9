//! Doctext Server Library
//!
//! Batch text extraction over HTTP. The binary in main.rs only wires
//! configuration, logging and the listener around [`routes::router`].
//!
//! # Modules
//!
//! - `document`: Format-agnostic document abstraction
//! - `mupdf`: MuPDF implementation of that abstraction
//! - `extract`: Validation, format resolution, extraction and aggregation
//! - `routes`: HTTP endpoints

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod mupdf;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;
