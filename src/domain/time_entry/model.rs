use chrono::{DateTime, Utc};

/// A recorded span of work by one user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: i32,
    /// Owning user; fixed at creation
    pub user_id: i32,
    pub description: String,
    pub start_time: DateTime<Utc>,
    /// Always strictly after `start_time`
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
