//! Route modules for the Doctext server

pub mod extract;
pub mod formats;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let body_limit = state.config().body_limit();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/extract-text", post(extract::extract_text))
        .route("/health", get(health::health_check))
        .route("/supported-formats", get(formats::supported_formats))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
