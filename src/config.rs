//! Configuration module
//!
//! Everything comes from environment variables; unset or empty values fall
//! back to defaults.

use std::path::PathBuf;

use thiserror::Error;

use crate::infrastructure::database::{DatabaseConfig, DEFAULT_DATABASE_URL};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `worklogger=debug`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    /// Insert a demo user and entry into an empty store at startup
    pub seed_demo_data: bool,
    /// Landing document served on `GET /` instead of the endpoint map
    pub static_index: Option<PathBuf>,
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("SERVER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "SERVER_PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let seed_demo_data = match get("SEED_DEMO_DATA") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                key: "SEED_DEMO_DATA",
                value: raw.clone(),
                reason: "expected true/false".to_string(),
            })?,
            None => false,
        };

        Ok(Self {
            server: ServerConfig {
                host: get("SERVER_HOST").unwrap_or_else(|| ServerConfig::default().host),
                port,
            },
            logging: LoggingConfig {
                level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
            database: DatabaseConfig {
                url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            },
            seed_demo_data,
            static_index: get("STATIC_INDEX").map(PathBuf::from),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = load(&[]).unwrap();

        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.database.url, DEFAULT_DATABASE_URL);
        assert!(!cfg.seed_demo_data);
        assert!(cfg.static_index.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = load(&[
            ("SERVER_PORT", "9090"),
            ("SERVER_HOST", "127.0.0.1"),
            ("LOG_LEVEL", "debug"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("SEED_DEMO_DATA", "TRUE"),
            ("STATIC_INDEX", "./public/index.html"),
        ])
        .unwrap();

        assert_eq!(cfg.server.address(), "127.0.0.1:9090");
        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.database.is_in_memory());
        assert!(cfg.seed_demo_data);
        assert_eq!(cfg.static_index, Some(PathBuf::from("./public/index.html")));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let cfg = load(&[("SERVER_PORT", ""), ("LOG_LEVEL", "  ")]).unwrap();

        assert_eq!(cfg.server.port, DEFAULT_PORT);
        assert_eq!(cfg.logging.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn bad_port_is_rejected() {
        for raw in ["http", "70000", "-1"] {
            let err = load(&[("SERVER_PORT", raw)]).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: "SERVER_PORT", .. }));
        }
    }

    #[test]
    fn bad_seed_flag_is_rejected() {
        assert!(load(&[("SEED_DEMO_DATA", "maybe")]).is_err());
        assert!(!load(&[("SEED_DEMO_DATA", "off")]).unwrap().seed_demo_data);
    }
}
