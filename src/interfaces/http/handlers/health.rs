//! Health check handler

use axum::http::StatusCode;
use axum::response::Response;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::interfaces::http::common::{json_response, ApiError};

/// Liveness response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness only: the store is deliberately not consulted.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn health_check() -> Result<Response, ApiError> {
    json_response(
        StatusCode::OK,
        &HealthResponse {
            status: "ok".to_string(),
        },
    )
}
