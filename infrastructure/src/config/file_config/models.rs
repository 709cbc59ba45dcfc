//! Model fallback configuration from TOML (`[models]` section)

use super::ConfigValidationError;
use newsdesk_domain::{DomainError, Model, ModelPreferenceList};
use serde::{Deserialize, Serialize};

/// Model fallback order from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// preference = ["gemini-3-pro-preview", "gemini-2.5-pro"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model identifiers, most preferred first
    pub preference: Vec<String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            preference: Model::default_models()
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl FileModelsConfig {
    pub fn preference_list(&self) -> Result<ModelPreferenceList, DomainError> {
        ModelPreferenceList::parse(&self.preference)
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        if self.preference.is_empty() {
            return vec![ConfigValidationError::EmptyModelList];
        }
        self.preference
            .iter()
            .enumerate()
            .filter(|(_, name)| name.trim().is_empty())
            .map(|(i, _)| ConfigValidationError::EmptyModelName(i))
            .collect()
    }
}
