use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by the HTTP API layer.
///
/// Reads that merely find nothing are `NotFound`; everything that reaches
/// a client serializes to `{"error": message, "status": code}` JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: user must be logged in")]
    Unauthenticated,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<dispatch_store::StoreError> for ApiError {
    fn from(e: dispatch_store::StoreError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<dispatch_saved::SavedError> for ApiError {
    fn from(e: dispatch_saved::SavedError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<dispatch_reviews::ReviewError> for ApiError {
    fn from(e: dispatch_reviews::ReviewError) -> Self {
        match e {
            dispatch_reviews::ReviewError::Validation(message) => Self::Validation(message),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
