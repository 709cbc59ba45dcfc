//! Input records and the artifacts generated from them.

pub mod artifact;
pub mod input;

pub use artifact::{IRRELEVANT, OutputArtifact};
pub use input::{InputRecord, RecordId};
