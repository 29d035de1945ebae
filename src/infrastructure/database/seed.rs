//! Demo data for a fresh store

use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::domain::{CreateTimeEntryDto, CreateUserDto, DomainResult, RepositoryProvider, UserRole};

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_EMAIL: &str = "demo@example.com";
const DEMO_PASSWORD: &str = "demo-password";
const DEMO_DESCRIPTION: &str = "Hardcoded test entry";

/// Insert one demo employee and a two-hour entry ending now.
///
/// Does nothing when any user already exists. Returns whether data was written.
pub async fn seed_demo_data(repos: &dyn RepositoryProvider) -> DomainResult<bool> {
    if repos.users().count_users().await? > 0 {
        info!("Users present, skipping demo seed");
        return Ok(false);
    }

    let user = repos
        .users()
        .create_user(CreateUserDto {
            username: DEMO_USERNAME.to_string(),
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
            role: UserRole::Employee,
        })
        .await?;

    let now = Utc::now();
    let entry = repos
        .time_entries()
        .create_time_entry(CreateTimeEntryDto {
            user_id: user.id,
            description: DEMO_DESCRIPTION.to_string(),
            start_time: now - Duration::hours(2),
            end_time: now,
        })
        .await?;

    info!(user_id = user.id, entry_id = entry.id, "Demo data seeded");
    warn!("Demo user '{}' has a well-known password", DEMO_USERNAME);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_support::memory_db;
    use crate::infrastructure::database::SeaOrmRepositoryProvider;

    #[tokio::test]
    async fn seeds_once() {
        let repos = SeaOrmRepositoryProvider::new(memory_db().await).with_hash_cost(4);

        assert!(seed_demo_data(&repos).await.unwrap());
        assert!(!seed_demo_data(&repos).await.unwrap());

        let entries = repos.time_entries().find_all().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, DEMO_DESCRIPTION);
        assert_eq!(entries[0].end_time - entries[0].start_time, Duration::hours(2));
        assert_eq!(repos.users().count_users().await.unwrap(), 1);
    }
}
