// src/server/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use project_stats_shared_kernel::ProjectStatsError;
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinError;

/// Failure of an API handler, rendered as `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller sent something unusable: a bad root or a malformed body.
    #[error("{0}")]
    BadRequest(String),

    #[error("An error occurred: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "scan request failed");
        } else {
            tracing::debug!(error = %self, "scan request rejected");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

impl From<ProjectStatsError> for ApiError {
    fn from(err: ProjectStatsError) -> Self {
        match err.scan_error() {
            Some(scan) => Self::BadRequest(scan.to_string()),
            None => Self::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        Self::Internal(err.to_string())
    }
}
