//! Model fallback order and per-record generation results.

pub mod outcome;
pub mod preference;

pub use outcome::{GenerationOutcome, ModelAttempt};
pub use preference::ModelPreferenceList;
