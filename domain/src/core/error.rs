//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("No models configured for generation")]
    NoModels,

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid record identifier: {0:?}")]
    InvalidRecordId(String),
}
