//! Infrastructure layer for newsdesk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod storage;
pub mod waiter;

// Re-export commonly used types
pub use config::{
    ApiKey, ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig,
    FileLoggingConfig, FileModelsConfig, FilePipelineConfig,
};
pub use gemini::{GeminiError, GeminiSettings, GeminiTextGenerator};
pub use logging::JsonlGenerationLogger;
pub use storage::FsRecordStore;
pub use waiter::TokioWaiter;
