// file: src/server/handlers.rs
// description: /analyze multipart handler and liveness probe
// reference: https://docs.rs/axum/latest/axum/extract/struct.Multipart.html

use crate::analysis::AnalysisPipeline;
use crate::error::ServiceError;
use crate::models::{AnalyzeResponse, UploadedDocument};
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

pub async fn handle_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /analyze`: multipart form with `source_file` (required), any number
/// of `comparison_files`, and an optional `enable_web_search` boolean field.
pub async fn handle_analyze(
    Extension(pipeline): Extension<Arc<AnalysisPipeline>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<AnalyzeResponse>) {
    let mut source: Option<UploadedDocument> = None;
    let mut comparisons: Vec<UploadedDocument> = Vec::new();
    let mut enable_web_search = false;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(AnalyzeResponse::error(format!("Malformed upload: {e}"))),
                );
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "source_file" => {
                let filename = field.file_name().unwrap_or("source").to_string();
                match field.bytes().await {
                    Ok(bytes) => source = Some(UploadedDocument::new(filename, bytes.to_vec())),
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(AnalyzeResponse::error(format!("Malformed upload: {e}"))),
                        );
                    }
                }
            }
            "comparison_files" => {
                let filename = field.file_name().unwrap_or("comparison").to_string();
                match field.bytes().await {
                    Ok(bytes) => {
                        comparisons.push(UploadedDocument::new(filename, bytes.to_vec()));
                    }
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(AnalyzeResponse::error(format!("Malformed upload: {e}"))),
                        );
                    }
                }
            }
            "enable_web_search" => {
                let raw = field.text().await.unwrap_or_default();
                enable_web_search = matches!(raw.trim(), "true" | "True" | "1" | "on");
            }
            other => {
                info!("Ignoring unknown form field: {}", other);
            }
        }
    }

    let Some(source) = source else {
        return (
            StatusCode::BAD_REQUEST,
            Json(AnalyzeResponse::error("Missing source_file field.")),
        );
    };

    info!(
        "Analyzing {} against {} file(s), web_search={}",
        source.filename,
        comparisons.len(),
        enable_web_search
    );

    match pipeline.analyze(source, comparisons, enable_web_search).await {
        Ok(results) => (StatusCode::OK, Json(AnalyzeResponse::success(results))),
        Err(ServiceError::EmptySource) => (
            StatusCode::OK,
            Json(AnalyzeResponse::error("Source file is empty.")),
        ),
        Err(e) => {
            error!("Analysis failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AnalyzeResponse::error(e.to_string())),
            )
        }
    }
}
