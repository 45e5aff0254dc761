//! HTTP surface for document analysis.
//!
//! - `GET  /api/health`
//! - `POST /api/analyze-thesis` (multipart field `thesis`)

mod error;
mod handlers;
mod upload;

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use thesis_core::extraction::Extractor;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor>,
    /// Where uploads are staged while their text is extracted.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/api/health", get(handlers::handle_health))
        .route("/api/analyze-thesis", post(handlers::handle_analyze))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
