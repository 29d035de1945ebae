use chrono::{DateTime, Utc};
use validator::Validate;

use crate::domain::ValidationError;

#[derive(Debug, Clone, Validate)]
pub struct CreateTimeEntryDto {
    #[validate(range(min = 1, message = "is required"))]
    pub user_id: i32,
    #[validate(length(min = 1, max = 500, message = "length must be 1-500 characters"))]
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl CreateTimeEntryDto {
    /// Field rules plus the `end_time > start_time` invariant
    pub fn check(&self) -> Result<(), ValidationError> {
        let mut error = match self.validate() {
            Ok(()) => ValidationError::default(),
            Err(e) => ValidationError::from(e),
        };
        if self.end_time <= self.start_time {
            error.push("end_time", "must be after start_time");
        }
        error.into_result()
    }
}
