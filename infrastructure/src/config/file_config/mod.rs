//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; conversion to domain types happens in
//! the accessor methods so that problems surface through [`FileConfig::validate`].

mod gemini;
mod logging;
mod models;
mod pipeline;

pub use gemini::FileGeminiConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use pipeline::FilePipelineConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("models.preference cannot be empty")]
    EmptyModelList,

    #[error("models.preference[{0}]: model name cannot be empty")]
    EmptyModelName(usize),

    #[error("gemini.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyVariable,

    #[error("pipeline.input_extension cannot be empty")]
    EmptyExtension,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Input/output locations and pacing
    pub pipeline: FilePipelineConfig,
    /// Model fallback order
    pub models: FileModelsConfig,
    /// Gemini API settings
    pub gemini: FileGeminiConfig,
    /// Structured log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        issues.extend(self.models.validate());
        issues.extend(self.pipeline.validate());
        issues.extend(self.gemini.validate());
        issues
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
