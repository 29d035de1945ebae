use async_trait::async_trait;

use super::{CreateTimeEntryDto, TimeEntry};
use crate::domain::DomainResult;

#[async_trait]
pub trait TimeEntryRepositoryInterface: Send + Sync {
    /// Validate and insert; nothing reaches the store on a validation failure
    async fn create_time_entry(&self, dto: CreateTimeEntryDto) -> DomainResult<TimeEntry>;

    /// Every entry in insertion order. Unpaginated.
    async fn find_all(&self) -> DomainResult<Vec<TimeEntry>>;
}
