//! Domain layer: entities, validation rules and repository interfaces

pub mod error;
pub mod repositories;
pub mod time_entry;
pub mod user;

pub use error::{DomainError, DomainResult, FieldViolation, ValidationError};
pub use repositories::RepositoryProvider;
pub use time_entry::{CreateTimeEntryDto, TimeEntry, TimeEntryRepositoryInterface};
pub use user::{CreateUserDto, User, UserRepositoryInterface, UserRole};
