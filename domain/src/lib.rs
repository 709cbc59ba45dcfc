//! Domain layer for newsdesk
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **InputRecord**: one social-media post, with the text that is summarized
//! - **OutputArtifact**: the generated news text, named `news_<id>.txt`
//! - **ModelPreferenceList**: models tried in order until one succeeds
//! - **GenerationOutcome**: success with the model used, or total failure

pub mod core;
pub mod generation;
pub mod prompt;
pub mod record;

// Re-export commonly used types
pub use core::{error::DomainError, failure::FailureKind, model::Model};
pub use generation::{GenerationOutcome, ModelAttempt, ModelPreferenceList};
pub use prompt::NewsPromptTemplate;
pub use record::{IRRELEVANT, InputRecord, OutputArtifact, RecordId};
