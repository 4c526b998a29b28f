//! Configuration management.
//!
//! Configuration is read from environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `8000`.
//! - `SEED_ON_STARTUP` - Optional. Populate the mock dataset at boot.
//!   Defaults to `true`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Whether to seed the store with the mock dataset at startup
    pub seed_on_startup: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let seed_on_startup = match std::env::var("SEED_ON_STARTUP") {
            Ok(value) => value.parse().map_err(|e| {
                ConfigError::InvalidValue("SEED_ON_STARTUP".to_string(), format!("{}", e))
            })?,
            Err(_) => true,
        };

        Ok(Self {
            host,
            port,
            seed_on_startup,
        })
    }

    /// A config with fixed values for unit tests (no seeding).
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            seed_on_startup: false,
        }
    }
}
