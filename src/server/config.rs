use crate::server::error::config::ConfigError;

/// Environment-sourced application configuration.
///
/// Every variable is required. In particular the admin session signing key
/// has no fallback: a missing `ORRERY_SECRET_KEY` aborts startup instead of
/// silently degrading to a hardcoded secret.
pub struct Config {
    pub database_url: String,
    /// Signs the admin session cookie; must be at least 64 bytes.
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            secret_key: require("ORRERY_SECRET_KEY")?,
        })
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
