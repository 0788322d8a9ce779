use std::env;

use crate::error::ConfigError;
use crate::utils::constant::*;

/// Process-wide configuration, resolved once at startup.
///
/// Every field is read from the environment (with a literal default)
/// before the server starts and never mutated afterwards, so the value
/// is safe to share across concurrent handlers without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port the server binds to. From `PORT`, default 8080.
    pub port: u16,
    /// Version string echoed by every endpoint. From `VERSION`.
    pub version: String,
    /// Deployment environment name echoed by `/info`. From `ENVIRONMENT`.
    pub environment: String,
}

impl AppConfig {
    /// Resolves configuration from the process environment.
    ///
    /// A missing variable falls back to its default; a `PORT` that is
    /// present but non-numeric is a fatal [`ConfigError`], not a
    /// fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
            None => DEFAULT_PORT,
        };

        let version = get("VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let environment = get("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            port,
            version,
            environment,
        })
    }

    /// Whether the local debug mode is active.
    ///
    /// Only the exact string `"development"` enables it.
    pub fn is_development(&self) -> bool {
        self.environment == DEFAULT_ENVIRONMENT
    }
}
