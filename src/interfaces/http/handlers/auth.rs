//! Placeholder login
//!
//! No credentials are checked: the requested role is echoed back.

use axum::http::StatusCode;
use axum::response::Response;
use tracing::info;

use crate::interfaces::http::common::{json_response, ApiError, ErrorResponse, ValidatedJson};
use crate::interfaces::http::dto::{LoginRequest, LoginResponse};

#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Role accepted", body = LoginResponse),
        (status = 400, description = "Malformed body or unknown role", body = ErrorResponse),
        (status = 405, description = "Method other than POST", body = ErrorResponse)
    )
)]
pub async fn login(
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Response, ApiError> {
    info!(role = %request.role, "Login accepted");
    json_response(
        StatusCode::OK,
        &LoginResponse {
            success: true,
            role: request.role,
        },
    )
}
