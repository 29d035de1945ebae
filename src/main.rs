//! Worklogger HTTP server.
//!
//! Reads configuration from environment variables (`SERVER_PORT`, `LOG_LEVEL`,
//! `DATABASE_URL`, `SEED_DEMO_DATA`, `STATIC_INDEX`).

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use worklogger::config::DEFAULT_LOG_LEVEL;
use worklogger::domain::RepositoryProvider;
use worklogger::infrastructure::database::seed::seed_demo_data;
use worklogger::infrastructure::shutdown_signal;
use worklogger::{connect, create_api_router, AppConfig, AppState, SeaOrmRepositoryProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config = match AppConfig::from_env() {
        Ok(cfg) => {
            init_tracing(&cfg.logging.level);
            cfg
        }
        Err(e) => {
            init_tracing(DEFAULT_LOG_LEVEL);
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting Worklogger...");

    // ── Database ───────────────────────────────────────────────
    let db = match connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    if config.seed_demo_data {
        if let Err(e) = seed_demo_data(repos.as_ref()).await {
            error!("Failed to seed demo data: {}", e);
        }
    }

    // ── HTTP ───────────────────────────────────────────────────
    let state = AppState::new(repos).with_static_index(config.static_index.clone());
    let app = create_api_router(state);

    let addr = config.server.address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return Err(e.into());
        }
    };
    info!("Server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        let _ = db.close().await;
        return Err(e.into());
    }

    info!("🧹 Performing final cleanup...");
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("✅ Database connection closed");
    }

    info!("👋 Worklogger shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins, then `level`, then the default
fn init_tracing(level: &str) {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match EnvFilter::try_new(level) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(e)),
        },
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = rejected {
        warn!(
            "LOG_LEVEL '{}' is not a valid filter ({}), using '{}'",
            level, e, DEFAULT_LOG_LEVEL
        );
    }
}
