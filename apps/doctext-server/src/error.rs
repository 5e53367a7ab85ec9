//! Error types for the Doctext server
//!
//! Only request-level faults live here. Anything that goes wrong with a
//! single file is reported inside that file's result, never as an HTTP
//! error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extract::BatchRejection;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No files provided")]
    NoFiles,

    #[error("Too many files: maximum {max} files allowed per request")]
    TooManyFiles { max: usize },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<BatchRejection> for AppError {
    fn from(rejection: BatchRejection) -> Self {
        match rejection {
            BatchRejection::NoFiles => AppError::NoFiles,
            BatchRejection::TooManyFiles { max } => AppError::TooManyFiles { max },
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoFiles | AppError::TooManyFiles { .. } | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AppError::NoFiles => "no_files",
            AppError::TooManyFiles { .. } => "too_many_files",
            AppError::BadRequest(_) => "bad_request",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::Timeout(_) => "timeout",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::NoFiles | AppError::TooManyFiles { .. } => self.to_string(),
            AppError::BadRequest(msg) | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Timeout(_) => {
                tracing::warn!("{}", self);
                self.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        };

        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message,
        });

        (self.status(), body).into_response()
    }
}
