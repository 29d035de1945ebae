//! Time entry DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CreateTimeEntryDto, TimeEntry, ValidationError};
use crate::interfaces::http::common::ValidateRequest;

/// Time entry as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeEntryDto {
    pub id: i32,
    pub user_id: i32,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimeEntryDto {
    pub fn from_domain(entry: TimeEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            description: entry.description,
            start_time: entry.start_time,
            end_time: entry.end_time,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// Body of `POST /timeentries`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTimeEntryRequest {
    pub user_id: i32,
    /// 1-500 characters
    pub description: String,
    pub start_time: DateTime<Utc>,
    /// Must be after `start_time`
    pub end_time: DateTime<Utc>,
}

impl From<CreateTimeEntryRequest> for CreateTimeEntryDto {
    fn from(req: CreateTimeEntryRequest) -> Self {
        Self {
            user_id: req.user_id,
            description: req.description,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

impl ValidateRequest for CreateTimeEntryRequest {
    fn check(&self) -> Result<(), ValidationError> {
        CreateTimeEntryDto::from(self.clone()).check()
    }
}
