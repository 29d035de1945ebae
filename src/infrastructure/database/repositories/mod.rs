//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod repository_provider;
pub mod time_entry_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
pub use time_entry_repository::SeaOrmTimeEntryRepository;
pub use user_repository::SeaOrmUserRepository;
