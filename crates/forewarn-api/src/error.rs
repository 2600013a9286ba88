use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use forewarn_core::{FieldError, ValidationError};

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    /// Invalid diagnosis input; carries every offending field.
    Validation(ValidationError),
    /// The narrative model could not be reached on a path with no fallback.
    Upstream(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, fields) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                err.to_string(),
                Some(err.errors),
            ),
            ApiError::Upstream(msg) => {
                tracing::error!("upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream service unavailable".to_string(),
                    None,
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error: message, fields })).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<forewarn_store::StoreError> for ApiError {
    fn from(e: forewarn_store::StoreError) -> Self {
        match e {
            forewarn_store::StoreError::NotFound { key } => {
                ApiError::NotFound(format!("record not found: {key}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<forewarn_bedrock::BedrockError> for ApiError {
    fn from(e: forewarn_bedrock::BedrockError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
