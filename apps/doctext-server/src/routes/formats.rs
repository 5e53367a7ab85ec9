//! Supported format listing

use std::collections::BTreeMap;

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::document::DocumentFormat;

#[derive(Debug, Serialize, Deserialize)]
pub struct SupportedFormatsResponse {
    pub formats: Vec<DocumentFormat>,
    /// Format tag to human-readable name
    pub details: BTreeMap<DocumentFormat, String>,
}

pub async fn supported_formats() -> Json<SupportedFormatsResponse> {
    let details = DocumentFormat::ALL
        .into_iter()
        .map(|format| (format, format.description().to_string()))
        .collect();

    Json(SupportedFormatsResponse {
        formats: DocumentFormat::ALL.to_vec(),
        details,
    })
}
