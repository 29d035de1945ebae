//! Time entry API handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use tracing::info;

use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{json_response, ApiError, ErrorResponse, ValidatedJson};
use crate::interfaces::http::dto::{CreateTimeEntryRequest, TimeEntryDto};

/// Time entry handler state
#[derive(Clone)]
pub struct TimeEntryAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/timeentries",
    tag = "Time Entries",
    responses(
        (status = 200, description = "Every time entry in insertion order", body = [TimeEntryDto]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_time_entries(
    State(state): State<TimeEntryAppState>,
) -> Result<Response, ApiError> {
    let items: Vec<TimeEntryDto> = state
        .repos
        .time_entries()
        .find_all()
        .await?
        .into_iter()
        .map(TimeEntryDto::from_domain)
        .collect();

    json_response(StatusCode::OK, &items)
}

#[utoipa::path(
    post,
    path = "/timeentries",
    tag = "Time Entries",
    request_body = CreateTimeEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = TimeEntryDto),
        (status = 400, description = "Malformed body or validation error", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_time_entry(
    State(state): State<TimeEntryAppState>,
    ValidatedJson(request): ValidatedJson<CreateTimeEntryRequest>,
) -> Result<Response, ApiError> {
    let entry = state
        .repos
        .time_entries()
        .create_time_entry(request.into())
        .await?;

    info!(id = entry.id, user_id = entry.user_id, "Time entry created");
    json_response(StatusCode::CREATED, &TimeEntryDto::from_domain(entry))
}
