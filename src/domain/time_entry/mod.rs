//! TimeEntry aggregate

pub mod model;
pub mod repository;

mod dto_create;

pub use model::TimeEntry;

pub use dto_create::CreateTimeEntryDto;

pub use repository::TimeEntryRepositoryInterface;
