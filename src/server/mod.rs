// file: src/server/mod.rs
// description: HTTP server module exports and router assembly
// reference: https://docs.rs/axum

pub mod handlers;

use crate::analysis::AnalysisPipeline;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the application router.
///
/// Cross-origin access is deliberately unrestricted; the service is consumed
/// by browser frontends served from arbitrary origins.
pub fn router(pipeline: Arc<AnalysisPipeline>, max_upload_mb: usize) -> Router {
    Router::new()
        .route("/analyze", post(handlers::handle_analyze))
        .route("/health", get(handlers::handle_health))
        .layer(Extension(pipeline))
        .layer(DefaultBodyLimit::max(max_upload_mb * 1024 * 1024))
        .layer(CorsLayer::permissive())
}
