//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use faceframe_vision::VisionError;

use crate::upload::UploadError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Upload validation failure. Recovered locally by redirecting back to
    /// the upload form, with no error detail surfaced to the client.
    #[error("Upload rejected: {0}")]
    UploadRejected(#[from] UploadError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Vision(#[from] VisionError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // The demo contract: invalid uploads re-render the form.
            ApiError::UploadRejected(reason) => {
                warn!(%reason, "Rejected upload, redirecting to form");
                Redirect::to("/").into_response()
            }
            ApiError::BadRequest(_) => {
                let body = ErrorResponse {
                    detail: self.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Internal(_) | ApiError::Vision(_) => {
                // Don't expose internal error details in production
                let detail = if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal error occurred".to_string()
                } else {
                    self.to_string()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { detail }),
                )
                    .into_response()
            }
        }
    }
}
