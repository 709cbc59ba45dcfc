//! Ordered model fallback list

use crate::core::{error::DomainError, model::Model};
use serde::{Deserialize, Serialize};

/// Models to try for each record, most preferred first (Value Object)
///
/// Never empty, never reordered during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Model>", into = "Vec<Model>")]
pub struct ModelPreferenceList(Vec<Model>);

impl ModelPreferenceList {
    pub fn new(models: Vec<Model>) -> Result<Self, DomainError> {
        if models.is_empty() {
            return Err(DomainError::NoModels);
        }
        if let Some(blank) = models.iter().find(|m| m.as_str().trim().is_empty()) {
            return Err(DomainError::InvalidModel(blank.to_string()));
        }
        Ok(Self(models))
    }

    /// Parse a list of identifiers, e.g. from the command line.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, DomainError> {
        Self::new(names.iter().map(|n| Model::from(n.as_ref())).collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Model> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Model] {
        &self.0
    }
}

impl Default for ModelPreferenceList {
    fn default() -> Self {
        Self(Model::default_models())
    }
}

impl TryFrom<Vec<Model>> for ModelPreferenceList {
    type Error = DomainError;

    fn try_from(models: Vec<Model>) -> Result<Self, Self::Error> {
        Self::new(models)
    }
}

impl From<ModelPreferenceList> for Vec<Model> {
    fn from(list: ModelPreferenceList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a ModelPreferenceList {
    type Item = &'a Model;
    type IntoIter = std::slice::Iter<'a, Model>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for ModelPreferenceList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|m| m.as_str()).collect();
        write!(f, "{}", names.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_rejected() {
        assert_eq!(ModelPreferenceList::new(vec![]), Err(DomainError::NoModels));
    }

    #[test]
    fn test_blank_model_is_rejected() {
        let result = ModelPreferenceList::parse(&["gemini-2.5-pro", " "]);
        assert!(matches!(result, Err(DomainError::InvalidModel(_))));
    }

    #[test]
    fn test_order_is_preserved() {
        let list = ModelPreferenceList::parse(&["b-model", "a-model"]).unwrap();
        let names: Vec<&str> = list.iter().map(|m| m.as_str()).collect();
        assert_eq!(names, vec!["b-model", "a-model"]);
        assert_eq!(list.to_string(), "b-model -> a-model");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let result: Result<ModelPreferenceList, _> = serde_json::from_str("[]");
        assert!(result.is_err());
        let list: ModelPreferenceList = serde_json::from_str(r#"["gemini-2.5-pro"]"#).unwrap();
        assert_eq!(list.as_slice(), &[Model::Gemini25Pro]);
    }
}
