use validator::Validate;

use super::UserRole;
use crate::domain::ValidationError;

#[derive(Debug, Clone, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 3, max = 50, message = "length must be 3-50 characters"))]
    pub username: String,
    #[validate(
        length(min = 1, message = "is required"),
        email(message = "must be a valid email address")
    )]
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl CreateUserDto {
    /// Run every field rule, collecting all violations
    pub fn check(&self) -> Result<(), ValidationError> {
        self.validate().map_err(ValidationError::from)
    }
}
