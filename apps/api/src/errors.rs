use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::collaborators::SubmissionError;
use crate::upstream::UpstreamError;

/// A single reason a request body failed to decode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadError {
    #[serde(rename = "type")]
    pub kind: String,
    pub msg: String,
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid swipe data")]
    InvalidPayload(Vec<PayloadError>),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Invalid upstream data: {0}")]
    InvalidUpstreamData(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::NotFound(msg) | UpstreamError::EmptyResult(msg) => {
                AppError::NotFound(msg.to_string())
            }
            UpstreamError::Transport { service, source } => {
                AppError::UpstreamUnavailable(format!("{service}: {source}"))
            }
            UpstreamError::Decode { service, source } => {
                AppError::InvalidUpstreamData(format!("{service}: {source}"))
            }
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        AppError::UpstreamUnavailable(format!("application submitter: {err}"))
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UpstreamUnavailable(_) | AppError::InvalidUpstreamData(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::NotFound(msg) => json!({ "detail": msg, "code": "NOT_FOUND" }),
            AppError::Validation(msg) => json!({ "detail": msg, "code": "VALIDATION_ERROR" }),
            AppError::InvalidPayload(errors) => json!({
                "detail": "Invalid swipe data",
                "code": "INVALID_PAYLOAD",
                "errors": errors,
            }),
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("Upstream unavailable: {msg}");
                json!({
                    "detail": "An upstream service is unavailable",
                    "code": "UPSTREAM_UNAVAILABLE",
                })
            }
            AppError::InvalidUpstreamData(msg) => {
                tracing::error!("Invalid upstream data: {msg}");
                json!({
                    "detail": "An upstream service returned invalid data",
                    "code": "INVALID_UPSTREAM_DATA",
                })
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                json!({
                    "detail": "An internal server error occurred",
                    "code": "INTERNAL_ERROR",
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
