//! Configuration loading for newsdesk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NEWSDESK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./newsdesk.toml` or `./.newsdesk.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/newsdesk/config.toml`
//! 5. Default values
//!
//! The API key is only ever taken from the environment, see [`ApiKey`].

mod credentials;
mod file_config;
mod loader;

pub use credentials::{ApiKey, ConfigError};
pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileLoggingConfig, FileModelsConfig,
    FilePipelineConfig,
};
pub use loader::ConfigLoader;
