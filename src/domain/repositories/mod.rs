//! Repository traits for the domain layer

use super::time_entry::TimeEntryRepositoryInterface;
use super::user::UserRepositoryInterface;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let entries = repos.time_entries().find_all().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepositoryInterface;
    fn time_entries(&self) -> &dyn TimeEntryRepositoryInterface;
}
