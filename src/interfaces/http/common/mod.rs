//! Shared HTTP building blocks: error body, error mapping, JSON extraction

pub mod error;
pub mod validated_json;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use error::ApiError;
pub use validated_json::{ValidateRequest, ValidatedJson};

/// Error body returned by every failing endpoint
///
/// `{"success": false, "error": "description"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Serialize `value` as an `application/json` response.
///
/// Serialization failures become [`ApiError::Encoding`] so they are logged
/// and answered with a bare 500.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value)?;
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
