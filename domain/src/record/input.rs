//! Input record value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Name of the payload field that carries the post text.
const TEXT_FIELD: &str = "text";

/// Identifier of an input record, derived from its source file stem
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() || id.contains(['/', '\\']) {
            return Err(DomainError::InvalidRecordId(id));
        }
        Ok(Self(id))
    }

    /// Derive the identifier from a source path (`posts/post_1.json` → `post_1`).
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(stem)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One social-media post to be summarized
///
/// Immutable once built. `content` is what gets handed to the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    id: RecordId,
    payload: Value,
    content: String,
}

impl InputRecord {
    /// Build a record from its parsed document.
    ///
    /// The `text` field is used when present (strings verbatim, other values
    /// as their JSON text). Without it the whole document is serialized.
    pub fn from_json(id: RecordId, payload: Value) -> Self {
        let content = match payload.get(TEXT_FIELD) {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => payload.to_string(),
        };
        Self {
            id,
            payload,
            content,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(s: &str) -> RecordId {
        RecordId::new(s).unwrap()
    }

    #[test]
    fn test_text_field_is_used_verbatim() {
        let record = InputRecord::from_json(id("post_1"), json!({"text": "hello"}));
        assert_eq!(record.content(), "hello");
    }

    #[test]
    fn test_missing_text_uses_whole_document() {
        let payload = json!({"foo": 1});
        let record = InputRecord::from_json(id("post_2"), payload.clone());
        assert_eq!(record.content(), payload.to_string());
        assert_eq!(record.content(), r#"{"foo":1}"#);
    }

    #[test]
    fn test_non_string_text_is_serialized() {
        let record = InputRecord::from_json(id("post_3"), json!({"text": 42}));
        assert_eq!(record.content(), "42");
    }

    #[test]
    fn test_non_object_payload_uses_whole_document() {
        let record = InputRecord::from_json(id("post_4"), json!(["a", "b"]));
        assert_eq!(record.content(), r#"["a","b"]"#);
    }

    #[test]
    fn test_record_id_from_path() {
        let rid = RecordId::from_path(Path::new("posts/tweet_123.json")).unwrap();
        assert_eq!(rid.as_str(), "tweet_123");
    }

    #[test]
    fn test_record_id_rejects_empty_and_separators() {
        assert!(RecordId::new("").is_err());
        assert!(RecordId::new("  ").is_err());
        assert!(RecordId::new("a/b").is_err());
    }
}
