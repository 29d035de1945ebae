//! Data Transfer Objects for REST API

pub mod auth;
pub mod time_entry;

pub use auth::*;
pub use time_entry::*;
