pub mod auth;
pub mod fallback;
pub mod health;
pub mod root;
pub mod time_entries;
