// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite:cms.db?mode=rwc".into()
}

fn default_max_connections() -> u32 {
    16
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to a
    /// local SQLite file when `DATABASE_URL` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_values(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
        )
    }

    fn from_values(
        database_url: Option<String>,
        max_connections: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url.unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Invalid("DATABASE_URL must not be empty".into()));
        }

        let database_max_connections = max_connections
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or_else(default_max_connections);

        Ok(Self {
            database_url,
            database_max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }
}
