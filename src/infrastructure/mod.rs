//! Infrastructure layer - external concerns

pub mod crypto;
pub mod database;
pub mod server;

pub use database::{connect, init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use server::shutdown_signal;
