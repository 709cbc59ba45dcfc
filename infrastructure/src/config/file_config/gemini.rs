//! Gemini API configuration from TOML (`[gemini]` section)

use super::ConfigValidationError;
use crate::gemini::{DEFAULT_BASE_URL, GeminiSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Name of the environment variable holding the API key by default.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini API configuration from TOML
///
/// The key itself is never read from a file, only the name of the
/// environment variable that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    pub api_key_env: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileGeminiConfig {
    pub fn settings(&self) -> GeminiSettings {
        GeminiSettings {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyVariable);
        }
        issues
    }
}
