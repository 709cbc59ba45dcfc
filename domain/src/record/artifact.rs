//! Output artifact value object

use super::input::RecordId;

/// Sentinel the model returns when a post is spam or not newsworthy.
pub const IRRELEVANT: &str = "IRRELEVANT";

const ARTIFACT_PREFIX: &str = "news_";
const ARTIFACT_EXTENSION: &str = "txt";

/// Generated news text for one input record
///
/// The text is persisted verbatim, including the [`IRRELEVANT`] sentinel.
/// The file name is a pure function of the record identifier, and the file's
/// existence is what marks a record as processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    record_id: RecordId,
    text: String,
}

impl OutputArtifact {
    pub fn new(record_id: RecordId, text: impl Into<String>) -> Self {
        Self {
            record_id,
            text: text.into(),
        }
    }

    /// Deterministic file name for a record's artifact.
    pub fn file_name_for(record_id: &RecordId) -> String {
        format!("{ARTIFACT_PREFIX}{record_id}.{ARTIFACT_EXTENSION}")
    }

    pub fn file_name(&self) -> String {
        Self::file_name_for(&self.record_id)
    }

    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_irrelevant(&self) -> bool {
        self.text.trim() == IRRELEVANT
    }
}
