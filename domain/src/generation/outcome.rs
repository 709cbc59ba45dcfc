//! Generation outcome for one record

use crate::core::{failure::FailureKind, model::Model};
use crate::record::RecordId;

/// A failed call against one model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAttempt {
    pub model: Model,
    pub kind: FailureKind,
    pub message: String,
}

impl ModelAttempt {
    pub fn failed(model: Model, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: FailureKind::classify(&message),
            model,
            message,
        }
    }
}

/// Result of running the fallback chain for one record. Never partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success {
        text: String,
        model: Model,
        /// Failed attempts that preceded the successful one
        failed_attempts: Vec<ModelAttempt>,
    },
    Failure {
        record_id: RecordId,
        failed_attempts: Vec<ModelAttempt>,
    },
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }

    /// The model that produced the text, if any.
    pub fn model(&self) -> Option<&Model> {
        match self {
            GenerationOutcome::Success { model, .. } => Some(model),
            GenerationOutcome::Failure { .. } => None,
        }
    }

    pub fn failed_attempts(&self) -> &[ModelAttempt] {
        match self {
            GenerationOutcome::Success {
                failed_attempts, ..
            }
            | GenerationOutcome::Failure {
                failed_attempts, ..
            } => failed_attempts,
        }
    }
}
