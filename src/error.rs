use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("no URL supplied")]
    EmptyInput,

    #[error("invalid URL syntax: {0}")]
    SyntaxInvalid(String),

    #[error("host did not resolve: {0}")]
    Unreachable(String),

    #[error("identifier is not a decimal number: {0}")]
    InvalidIdentifier(String),

    #[error("no mapping for identifier: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert AppError to HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // Every way a submission can be unacceptable - missing input,
            // bad syntax, disallowed scheme, unresolvable host, malformed
            // identifier token - renders as one uniform signal. Only a
            // well-formed identifier with no mapping gets its own message.
            AppError::EmptyInput
            | AppError::SyntaxInvalid(_)
            | AppError::Unreachable(_)
            | AppError::InvalidIdentifier(_) => {
                tracing::debug!("rejected input: {}", self);
                (StatusCode::BAD_REQUEST, json!({ "error": "invalid url" }))
            }
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "No short URL found for the given input" }),
            ),
            _ => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for AppResult
pub type AppResult<T> = Result<T, AppError>;
