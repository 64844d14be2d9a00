//! Server configuration loaded from the environment.

use crate::server::error::config::ConfigError;

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/pokedex.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

/// Server configuration loaded from environment variables.
///
/// | Variable       | Default                              |
/// |----------------|--------------------------------------|
/// | `DATABASE_URL` | `sqlite:///tmp/pokedex.db?mode=rwc`  |
/// | `PORT`         | `3000`                               |
pub struct Config {
    /// Connection string passed to sea-orm.
    pub database_url: String,
    /// TCP port the HTTP server binds on `0.0.0.0`.
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable was unset or valid
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is set but is not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_vars(database_url: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port,
        })
    }
}
