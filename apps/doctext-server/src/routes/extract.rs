//! Batch text extraction endpoint
//!
//! `POST /extract-text` takes one or more files as `multipart/form-data`
//! under the field name `files` (`file` is accepted too) and returns one
//! result per file, in upload order.
//!
//! Uploads are read chunk by chunk. A file that crosses the per-file size
//! limit keeps being drained so its size can be reported, but its bytes are
//! no longer buffered. The file count is checked as each new file starts, so
//! an over-long batch is refused without reading the rest of the body.
//!
//! Extraction itself is blocking MuPDF work and runs on a blocking worker.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::extract::{BatchLimits, ExtractionResponse, UploadedFile};
use crate::state::AppState;

/// Multipart field names that carry files
const FILE_FIELDS: [&str; 2] = ["files", "file"];

pub async fn extract_text(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractionResponse>> {
    let mut multipart =
        multipart.map_err(|rejection| upload_error(rejection.status(), rejection.body_text()))?;

    let batch_id = Uuid::new_v4();
    let timeout = state.config().request_timeout();

    let work = async move {
        let files = receive_files(&mut multipart, state.orchestrator().limits()).await?;
        run_batch(&state, files).await
    }
    .instrument(tracing::info_span!("batch", %batch_id));

    let response = match timeout {
        Some(limit) => tokio::time::timeout(limit, work)
            .await
            .map_err(|_| AppError::Timeout(limit.as_secs()))??,
        None => work.await?,
    };

    Ok(Json(response))
}

/// Read every file part of the upload
async fn receive_files(
    multipart: &mut Multipart,
    limits: BatchLimits,
) -> Result<Vec<UploadedFile>> {
    let mut files = Vec::new();

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        if !FILE_FIELDS.contains(&name.as_str()) {
            tracing::debug!(field = %name, "Ignoring form field");
            continue;
        }

        limits.check_count(files.len() + 1)?;

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let mut data = Vec::new();
        let mut size: u64 = 0;
        let mut oversized = false;

        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            size += chunk.len() as u64;
            if oversized {
                continue;
            }
            if !limits.accepts_size(size) {
                oversized = true;
                data = Vec::new();
                continue;
            }
            data.extend_from_slice(&chunk);
        }

        tracing::debug!(filename = %filename, size, oversized, "Received file");

        files.push(if oversized {
            UploadedFile::oversized(filename, size)
        } else {
            UploadedFile::new(filename, data)
        });
    }

    Ok(files)
}

/// Validate and process the batch on a blocking worker
async fn run_batch(state: &AppState, files: Vec<UploadedFile>) -> Result<ExtractionResponse> {
    state.orchestrator().limits().validate(&files)?;

    let orchestrator = state.orchestrator().clone();
    let span = tracing::Span::current();

    let outcome = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        orchestrator.run(files)
    })
    .await
    .map_err(|e| AppError::Internal(format!("extraction worker failed: {e}")))?;

    Ok(outcome?)
}

fn multipart_error(err: MultipartError) -> AppError {
    upload_error(err.status(), err.body_text())
}

fn upload_error(status: StatusCode, message: String) -> AppError {
    tracing::warn!(%status, "Failed to read upload: {}", message);
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}
