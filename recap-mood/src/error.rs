//! Error types for recap-mood
//!
//! [`MoodError`] covers the analysis core, [`ApiError`] the HTTP layer.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures of the aggregation/classification core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoodError {
    /// No feature vectors to average
    #[error("No features to calculate average from")]
    EmptyInput,

    /// A raw feature record lacks a required numeric field
    #[error("Malformed feature record: field '{field}' {reason}")]
    MalformedFeature { field: String, reason: String },
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("{0}")]
    BadRequest(String),

    /// Service misconfiguration (500)
    #[error("{0}")]
    Config(String),
}

impl From<MoodError> for ApiError {
    fn from(err: MoodError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
            "code": error_code,
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
