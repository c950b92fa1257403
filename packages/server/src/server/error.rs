//! Unified API error type.
//!
//! Handlers return `Result<T, ApiError>`; the [`IntoResponse`] impl turns
//! errors into a JSON body with an appropriate status code. Internal errors
//! are logged in full but clients only see a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller referenced a dream that does not exist.
    #[error("dream not found")]
    NotFound,

    /// The caller sent a well-formed but invalid request.
    #[error("{0}")]
    UnprocessableEntity(String),

    /// Database or other infrastructure failure.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::UnprocessableEntity(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
            ApiError::Internal(e) => {
                error!(error = %e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}
