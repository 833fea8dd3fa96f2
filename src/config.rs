//! Environment-driven application configuration.

use crate::error::config::ConfigError;

/// Runtime configuration loaded from environment variables.
pub struct Config {
    /// PostgreSQL connection string.
    pub database_url: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
        })
    }
}

fn require_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
