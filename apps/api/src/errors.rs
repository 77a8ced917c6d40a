#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::pathway::decoder::DecodeError;

/// User-visible message for provider and decode failures. Both failure
/// classes surface the same generic text; the logs carry the
/// distinguishing detail.
pub const GENERATION_FAILED_MSG: &str =
    "An error occurred while generating the learning pathway. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// A submission arrived while the session was not in a submittable state.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Provider error: {0}")]
    Provider(#[from] LlmError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "REQUEST_IN_FLIGHT", msg.clone()),
            AppError::Provider(e) => {
                tracing::error!("Provider error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    GENERATION_FAILED_MSG.to_string(),
                )
            }
            AppError::Decode(e) => {
                tracing::error!("Decode error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "DECODE_ERROR",
                    GENERATION_FAILED_MSG.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
