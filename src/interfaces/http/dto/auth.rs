//! Login DTOs

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::interfaces::http::common::ValidateRequest;

/// Role a client may claim at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoginRole {
    Worker,
    Manager,
}

impl fmt::Display for LoginRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Worker => f.write_str("worker"),
            Self::Manager => f.write_str("manager"),
        }
    }
}

/// Body of `POST /api/v1/login`. An unknown role fails deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub role: LoginRole,
}

impl ValidateRequest for LoginRequest {}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub role: LoginRole,
}
