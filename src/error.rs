//! Error types for the content client and proxy server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Request Failure ==
/// Why a single completion attempt (direct or proxied) did not produce content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// Network failure or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Well-formed response missing `choices[0].message.content`
    #[error("Validation error: {0}")]
    Validation(String),
}

// == Parse Error ==
/// Completion text that yields no structured payload.
///
/// Never escapes the parser's public entry points.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No JSON payload found in completion text")]
    NoPayload,

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("JSON payload is not an object")]
    NotAnObject,
}

// == Content Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Both request tiers failed for the primary lesson flow
    #[error("Generation failed: {0}")]
    Generation(#[from] RequestFailure),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Completion service failed while relaying a proxied request
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ContentError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ContentError::Upstream(msg) | ContentError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            // Raised by the content client only
            ContentError::Generation(cause) => (StatusCode::INTERNAL_SERVER_ERROR, cause.to_string()),
        };

        let body = Json(json!({
            "status": "error",
            "message": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, ContentError>;
