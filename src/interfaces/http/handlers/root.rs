//! Landing endpoint

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::interfaces::http::common::{json_response, ApiError};

#[derive(Clone, Default)]
pub struct RootState {
    pub static_index: Option<Arc<PathBuf>>,
}

/// Map of available endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub service: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

impl RootResponse {
    pub fn describe() -> Self {
        let endpoints = [
            ("GET /", "This endpoint map"),
            ("GET /health", "Liveness probe"),
            ("GET /timeentries", "List all time entries"),
            ("POST /timeentries", "Create a time entry"),
            ("POST /api/v1/login", "Placeholder login echoing the requested role"),
            ("GET /docs", "Swagger UI"),
        ]
        .into_iter()
        .map(|(route, about)| (route.to_string(), about.to_string()))
        .collect();
        Self {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints,
        }
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("json") => "application/json",
        _ => "text/plain; charset=utf-8",
    }
}

/// Serve the configured landing document, or the endpoint map.
///
/// An unreadable document is logged and the endpoint map is served instead.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Endpoint map or landing document", body = RootResponse)
    )
)]
pub async fn root(State(state): State<RootState>) -> Result<Response, ApiError> {
    if let Some(path) = state.static_index.as_deref() {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                return Ok(([(header::CONTENT_TYPE, content_type_for(path))], bytes).into_response())
            }
            Err(e) => warn!(
                path = %path.display(),
                error = %e,
                "Static index unreadable, serving endpoint map"
            ),
        }
    }

    json_response(StatusCode::OK, &RootResponse::describe())
}
