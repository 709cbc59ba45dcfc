//! Text generator port
//!
//! Defines the interface for the external text-generation service.

use async_trait::async_trait;
use newsdesk_domain::{FailureKind, Model};
use thiserror::Error;

/// Errors that can occur while generating text
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,
}

impl GatewayError {
    /// Classify this error by its message.
    pub fn failure_kind(&self) -> FailureKind {
        FailureKind::classify(&self.to_string())
    }
}

/// Generator for text completions
///
/// One call is one prompt against one model. Implementations (adapters)
/// live in the infrastructure layer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt` using `model`
    async fn generate(&self, model: &Model, prompt: &str) -> Result<String, GatewayError>;
}
