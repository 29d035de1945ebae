//! Database entities module

pub mod time_entry;
pub mod user;

pub use time_entry::Entity as TimeEntry;
pub use user::Entity as User;
