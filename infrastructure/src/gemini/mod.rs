//! Gemini adapter
//!
//! Implements the text generator port over the Generative Language REST
//! API using `reqwest`. Non-success statuses keep their HTTP code in the
//! error message so usage-limit failures can be recognised upstream.

pub mod error;
pub mod generator;
pub mod protocol;

pub use error::GeminiError;
pub use generator::{DEFAULT_BASE_URL, GeminiSettings, GeminiTextGenerator};
