use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::constants::{DEFAULT_CORS_ORIGIN, DEFAULT_SERVER_PORT};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub astra_db_id: String,
    pub astra_region: String,
    pub astra_keyspace: String,
    pub astra_token: String,
    /// Replaces the composed Astra URL when set.
    pub store_base_url: Option<String>,
    pub store_timeout: Option<Duration>,
    pub server_port: u16,
    pub cors_origin: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests need not touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        Ok(Config {
            astra_db_id: required("ASTRA_DB_ID")?,
            astra_region: required("ASTRA_REGION")?,
            astra_keyspace: required("ASTRA_KEYSPACE")?,
            astra_token: required("ASTRA_TOKEN")?,
            store_base_url: lookup("ASTRA_BASE_URL").filter(|s| !s.is_empty()),
            store_timeout: lookup("STORE_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs),
            server_port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn store_url(&self) -> String {
        match &self.store_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!(
                "https://{}-{}.apps.astra.datastax.com/api/rest/v2/keyspaces/{}",
                self.astra_db_id, self.astra_region, self.astra_keyspace
            ),
        }
    }
}
