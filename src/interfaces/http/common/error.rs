//! HTTP error mapping
//!
//! The one place where failures turn into status codes. Store and encoding
//! details are logged and never sent to the client.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use super::ErrorResponse;
use crate::domain::{DomainError, ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be parsed
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed { allow: &'static str },
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Domain(DomainError::Validation(e))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Domain(DomainError::Database(_)) | Self::Encoding(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Domain(DomainError::Database(detail)) => {
                error!(error = %detail, "Database operation failed");
                "Internal server error".to_string()
            }
            Self::Encoding(e) => {
                error!(error = %e, "Failed to encode response");
                "Internal server error".to_string()
            }
            Self::Domain(DomainError::Validation(v)) => format!("Validation failed: {}", v),
            other => other.to_string(),
        };

        let mut response = (status, Json(ErrorResponse::new(message))).into_response();
        if let Self::MethodNotAllowed { allow } = self {
            response
                .headers_mut()
                .insert(header::ALLOW, header::HeaderValue::from_static(allow));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            ApiError::from(ValidationError::new("role", "bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DomainError::Database("disk I/O error".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::MethodNotAllowed { allow: "POST" }.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn database_detail_is_not_leaked() {
        let response =
            ApiError::from(DomainError::Database("no such table: secrets".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("secrets"));
        assert!(body.contains("Internal server error"));
    }

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let response = ApiError::MethodNotAllowed { allow: "POST" }.into_response();
        assert_eq!(response.headers()[header::ALLOW], "POST");
    }
}
