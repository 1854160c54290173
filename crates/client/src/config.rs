//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `API_BASE_URL` - Base URL of the commerce backend (e.g. `http://localhost:5000`)
//!
//! ## Optional
//! - `ADMIN_API_TOKEN` - Bearer token to start with; otherwise obtained via login

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Gateway client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL.
    pub base_url: Url,
    /// Bearer token to seed the client with, if already known.
    pub token: Option<SecretString>,
}

impl ClientConfig {
    /// Build a config pointing at `base_url` with no token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("API_BASE_URL".to_string(), e.to_string()))?;
        Ok(Self {
            base_url,
            token: None,
        })
    }

    /// Load configuration from the environment (`.env` supported via
    /// `dotenvy` at the call site).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `API_BASE_URL` is unset
    /// and [`ConfigError::InvalidEnvVar`] when it fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("API_BASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("API_BASE_URL".to_string()))?;
        let mut config = Self::new(&base_url)?;
        config.token = std::env::var("ADMIN_API_TOKEN").ok().map(SecretString::from);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_base_url() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }

    #[test]
    fn test_accepts_valid_base_url() {
        let config = ClientConfig::new("http://localhost:5000").expect("config");
        assert_eq!(config.base_url.as_str(), "http://localhost:5000/");
        assert!(config.token.is_none());
    }
}
