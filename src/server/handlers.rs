// src/server/handlers.rs
//! Request handlers of the JSON API.

use std::{path::PathBuf, sync::Arc};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Local;
use project_stats_usecase::ScanRequest;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ApiError;
use crate::{engine, presentation::ScanResponse};

/// State shared by all handlers. Scans themselves share nothing.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub default_top_n: usize,
}

/// Body of `POST /api/scan`. Both fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ScanBody {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", version: crate::VERSION })
}

/// Runs one scan on the blocking pool and renders it as JSON.
pub async fn scan(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<ScanBody>, JsonRejection>,
) -> Result<Json<ScanResponse>, ApiError> {
    let Json(body) = body?;
    let request = ScanRequest::new(
        body.path.unwrap_or_else(|| PathBuf::from(".")),
        body.top.unwrap_or(state.default_top_n),
    );
    debug!(root = %request.root.display(), top = request.top_n, "scan requested");

    let result = tokio::task::spawn_blocking(move || engine::scan(&request)).await??;
    Ok(Json(ScanResponse::from_result(&result, &Local::now())))
}
