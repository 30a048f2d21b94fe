//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::infrastructure::ports::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more required query parameters were absent or blank.
    #[error("Missing required parameters: {}", .missing.join(", "))]
    MissingParameters {
        missing: Vec<&'static str>,
        example: &'static str,
    },
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    /// Record the error before it is turned into a response.
    pub fn log(&self) {
        match self {
            Self::MissingParameters { .. } => {
                tracing::warn!(error = %self, "Rejected request");
            }
            Self::Upstream(e) => {
                tracing::error!(error = %e, "Upstream request failed");
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingParameters { missing, example } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Missing required parameter",
                    "message": format!(
                        "Please provide {} as a query parameter (e.g., {})",
                        missing.join(", "),
                        example
                    ),
                })),
            )
                .into_response(),
            ApiError::Upstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch product data from Judge.me",
                    "details": e.to_string(),
                })),
            )
                .into_response(),
        }
    }
}
