//! Health check endpoint

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::document::DocumentFormat;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub supported_formats: Vec<DocumentFormat>,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_formats: DocumentFormat::ALL.to_vec(),
    })
}
