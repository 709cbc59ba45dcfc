//! Error types for the Gemini adapter

use newsdesk_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Non-success HTTP status with the API's own explanation
    #[error("HTTP {code} {reason}: {message}")]
    Api {
        code: u16,
        reason: String,
        message: String,
    },

    #[error("Empty response from {model} (finish reason: {finish_reason})")]
    EmptyResponse {
        model: String,
        finish_reason: String,
    },
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        let message = err.to_string();
        match &err {
            GeminiError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Transport(e) if e.is_connect() => GatewayError::ConnectionError(message),
            GeminiError::Api { code: 404, .. } => GatewayError::ModelNotAvailable(message),
            _ => GatewayError::RequestFailed(message),
        }
    }
}
