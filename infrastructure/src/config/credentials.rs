//! API credential loading

use super::ConfigValidationError;
use thiserror::Error;

/// Errors raised while assembling runtime configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Fold validation issues into one error
    pub fn invalid(issues: &[ConfigValidationError]) -> Self {
        let joined: Vec<String> = issues.iter().map(|e| e.to_string()).collect();
        ConfigError::Invalid(joined.join("; "))
    }
}

/// Secret API key; never printed
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key through `lookup`; blank values count as missing.
    pub fn from_lookup(
        var: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        match lookup(var) {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(ConfigError::MissingApiKey(var.to_string())),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
