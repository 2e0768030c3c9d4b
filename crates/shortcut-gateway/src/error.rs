use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shortcut_core::ShortenerError;
use tracing::{debug, error};

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors that terminate a request with a JSON error body.
///
/// User-facing messages are kept stable and generic; the underlying
/// reason only goes to the log.
#[derive(Debug)]
pub enum AppError {
    InvalidUrl(String),
    NotFound,
    Internal(String),
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::InvalidUrl(reason) => Self::InvalidUrl(reason),
            ShortenerError::Storage(reason) => Self::Internal(reason),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidUrl(reason) => {
                debug!(%reason, "rejected shorten request");
                (StatusCode::BAD_REQUEST, "please provide a valid url")
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "short url not found"),
            AppError::Internal(reason) => {
                error!(%reason, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
