//! Record store port
//!
//! Where input records are read from and output artifacts are written to.

use newsdesk_domain::{InputRecord, OutputArtifact, RecordId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Invalid input pattern: {0}")]
    Pattern(String),
}

/// A discovered input document that has not been read yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLocation {
    pub record_id: RecordId,
    pub path: PathBuf,
}

/// Storage for input records and generated artifacts
///
/// Existence of an artifact is the only processed-marker; there is no
/// separate manifest.
pub trait RecordStore: Send + Sync {
    /// List every input document. A missing source is an empty list.
    fn list_inputs(&self) -> Result<Vec<InputLocation>, StoreError>;

    /// Whether an artifact with this file name is already persisted
    fn artifact_exists(&self, file_name: &str) -> bool;

    /// Read and parse one input document
    fn read_input(&self, location: &InputLocation) -> Result<InputRecord, StoreError>;

    /// Persist an artifact as a whole, returning where it was written
    fn write_artifact(&self, artifact: &OutputArtifact) -> Result<PathBuf, StoreError>;

    /// Create the artifact destination if missing. Returns `true` when created.
    fn ensure_output_dir(&self) -> Result<bool, StoreError>;
}
