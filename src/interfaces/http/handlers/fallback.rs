//! JSON answers for unmatched paths and methods

use crate::interfaces::http::common::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn post_only() -> ApiError {
    ApiError::MethodNotAllowed { allow: "POST" }
}

pub async fn get_only() -> ApiError {
    ApiError::MethodNotAllowed { allow: "GET, HEAD" }
}

pub async fn get_or_post() -> ApiError {
    ApiError::MethodNotAllowed {
        allow: "GET, HEAD, POST",
    }
}
