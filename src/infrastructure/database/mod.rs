pub mod entities;
pub mod migrator;
pub mod repositories;
pub mod seed;

pub use repositories::SeaOrmRepositoryProvider;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use migrator::Migrator;

/// Default on-disk store
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./worklogger.db?mode=rwc";

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./worklogger.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory store, gone when the connection closes
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to database: {}", config.url);
    let mut options = ConnectOptions::new(config.url.clone());
    options.sqlx_logging(false);
    if config.is_in_memory() {
        // every pooled connection would otherwise get its own empty database
        options.max_connections(1).min_connections(1);
    }
    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Open the store and bring its schema up to date.
///
/// One-shot startup step; the caller decides how to treat failure.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = init_database(config).await?;

    info!("Running database migrations...");
    Migrator::up(&db, None).await?;
    info!("Migrations completed");

    Ok(db)
}


#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, Statement};

    use super::*;

    #[test]
    fn in_memory_is_detected() {
        assert!(DatabaseConfig::in_memory().is_in_memory());
        assert!(!DatabaseConfig::default().is_in_memory());
    }

    #[tokio::test]
    async fn connect_creates_both_tables() {
        let db = test_support::memory_db().await;

        let rows = db
            .query_all(Statement::from_string(
                db.get_database_backend(),
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .map(|r| r.try_get::<String>("", "name").unwrap())
            .collect();

        assert!(names.contains(&"users".to_string()));
        assert!(names.contains(&"time_entries".to_string()));
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_support::memory_db().await;
        Migrator::up(&db, None).await.unwrap();
    }

    #[tokio::test]
    async fn connect_fails_on_unopenable_path() {
        let config = DatabaseConfig {
            url: "sqlite:///nonexistent-dir/sub/worklogger.db?mode=ro".to_string(),
        };
        assert!(connect(&config).await.is_err());
    }
}
