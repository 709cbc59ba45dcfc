//! Pipeline configuration from TOML (`[pipeline]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Where posts are read from and news is written to
///
/// # Example
///
/// ```toml
/// [pipeline]
/// input_dir = "posts"
/// output_dir = "news"
/// input_extension = "json"
/// courtesy_delay_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Directory holding one JSON document per post
    pub input_dir: PathBuf,
    /// Directory receiving `news_<id>.txt` files (created if missing)
    pub output_dir: PathBuf,
    /// Extension of input documents, without the dot
    pub input_extension: String,
    /// Pause after each generated artifact, in milliseconds
    pub courtesy_delay_ms: u64,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("posts"),
            output_dir: PathBuf::from("news"),
            input_extension: "json".to_string(),
            courtesy_delay_ms: 2000,
        }
    }
}

impl FilePipelineConfig {
    pub fn courtesy_delay(&self) -> Duration {
        Duration::from_millis(self.courtesy_delay_ms)
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let extension = self.input_extension.trim_start_matches('.');
        if extension.trim().is_empty() {
            vec![ConfigValidationError::EmptyExtension]
        } else {
            vec![]
        }
    }
}
