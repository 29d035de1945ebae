//! # Worklogger
//!
//! Minimal time-tracking backend: record and list work time entries over
//! HTTP, persisted in SQLite.
//!
//! ## Architecture
//!
//! - **domain**: entities, validation rules, repository traits
//! - **infrastructure**: SeaORM store, migrations, bcrypt, shutdown signals
//! - **interfaces**: axum router, handlers and DTOs with Swagger documentation
//! - **config**: environment-driven settings

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{AppConfig, ConfigError};

// Re-export database types for easy access
pub use infrastructure::{connect, init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};
