//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::{TimeEntryRepositoryInterface, UserRepositoryInterface};

use super::time_entry_repository::SeaOrmTimeEntryRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let entries = repos.time_entries().find_all().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    time_entries: SeaOrmTimeEntryRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            time_entries: SeaOrmTimeEntryRepository::new(db),
        }
    }

    /// Override the bcrypt work factor used when creating users
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.users = self.users.with_hash_cost(cost);
        self
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepositoryInterface {
        &self.users
    }

    fn time_entries(&self) -> &dyn TimeEntryRepositoryInterface {
        &self.time_entries
    }
}
