//! Directory-backed [`RecordStore`]
//!
//! Inputs are the `*.<extension>` files of one directory; artifacts are
//! plain-text files in another. Artifacts are written to a hidden temporary
//! sibling first and renamed into place, so an interrupted write never leaves
//! a file under the final name.

use newsdesk_application::{InputLocation, RecordStore, StoreError};
use newsdesk_domain::{InputRecord, OutputArtifact, RecordId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct FsRecordStore {
    input_dir: PathBuf,
    output_dir: PathBuf,
    extension: String,
}

impl FsRecordStore {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        let extension: String = extension.into();
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    fn pattern(&self) -> String {
        let dir = glob::Pattern::escape(&self.input_dir.to_string_lossy());
        format!("{}/*.{}", dir, glob::Pattern::escape(&self.extension))
    }

    fn io_error(path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl RecordStore for FsRecordStore {
    fn list_inputs(&self) -> Result<Vec<InputLocation>, StoreError> {
        if !self.input_dir.is_dir() {
            debug!("Input directory {} does not exist", self.input_dir.display());
            return Ok(Vec::new());
        }

        let entries =
            glob::glob(&self.pattern()).map_err(|e| StoreError::Pattern(e.to_string()))?;

        let mut locations = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            match RecordId::from_path(&path) {
                Ok(record_id) => locations.push(InputLocation { record_id, path }),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }
        Ok(locations)
    }

    fn artifact_exists(&self, file_name: &str) -> bool {
        self.output_dir.join(file_name).exists()
    }

    fn read_input(&self, location: &InputLocation) -> Result<InputRecord, StoreError> {
        let raw = fs::read_to_string(&location.path)
            .map_err(|e| Self::io_error(&location.path, e))?;
        let payload = serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
            path: location.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(InputRecord::from_json(location.record_id.clone(), payload))
    }

    fn write_artifact(&self, artifact: &OutputArtifact) -> Result<PathBuf, StoreError> {
        let file_name = artifact.file_name();
        let target = self.output_dir.join(&file_name);
        let staging = self.output_dir.join(format!(".{file_name}.tmp"));

        if let Err(e) = fs::write(&staging, artifact.text()) {
            let _ = fs::remove_file(&staging);
            return Err(Self::io_error(&staging, e));
        }
        if let Err(e) = fs::rename(&staging, &target) {
            let _ = fs::remove_file(&staging);
            return Err(Self::io_error(&target, e));
        }
        Ok(target)
    }

    fn ensure_output_dir(&self) -> Result<bool, StoreError> {
        if self.output_dir.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.output_dir).map_err(|e| Self::io_error(&self.output_dir, e))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_application::{
        GatewayError, GenerateNewsInput, GenerateNewsUseCase, NoWait, TextGenerator,
    };
    use newsdesk_domain::{Model, ModelPreferenceList};
    use std::sync::{Arc, Mutex};

    struct EchoGenerator {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, _model: &Model, prompt: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("Generated headline\n\nBody.".to_string())
        }
    }

    fn store(root: &Path) -> FsRecordStore {
        FsRecordStore::new(root.join("posts"), root.join("news"), "json")
    }

    #[test]
    fn test_missing_input_dir_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store(dir.path()).list_inputs().unwrap().is_empty());
    }

    #[test]
    fn test_lists_only_matching_extension() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir_all(posts.join("nested.json")).unwrap();
        fs::write(posts.join("a.json"), "{}").unwrap();
        fs::write(posts.join("b.txt"), "{}").unwrap();

        let locations = store(dir.path()).list_inputs().unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].record_id.as_str(), "a");
    }

    #[test]
    fn test_read_input_extracts_text() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("t1.json"), r#"{"text": "hello", "id": 1}"#).unwrap();

        let store = store(dir.path());
        let location = store.list_inputs().unwrap().remove(0);
        let record = store.read_input(&location).unwrap();
        assert_eq!(record.content(), "hello");
        assert_eq!(record.payload()["id"], 1);
    }

    #[test]
    fn test_read_input_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("bad.json"), "{oops").unwrap();

        let store = store(dir.path());
        let location = store.list_inputs().unwrap().remove(0);
        assert!(matches!(
            store.read_input(&location),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_write_artifact_and_existence() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        assert!(store.ensure_output_dir().unwrap());
        assert!(!store.ensure_output_dir().unwrap());

        let artifact = OutputArtifact::new(RecordId::new("t1").unwrap(), "IRRELEVANT");
        assert!(!store.artifact_exists("news_t1.txt"));
        let path = store.write_artifact(&artifact).unwrap();

        assert_eq!(path, dir.path().join("news").join("news_t1.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "IRRELEVANT");
        assert!(store.artifact_exists("news_t1.txt"));
        assert!(!dir.path().join("news").join(".news_t1.txt.tmp").exists());
    }

    #[tokio::test]
    async fn test_pipeline_over_directories() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("old.json"), r#"{"text": "old"}"#).unwrap();
        fs::write(posts.join("new.json"), r#"{"foo": 1}"#).unwrap();

        let store = Arc::new(store(dir.path()));
        store.ensure_output_dir().unwrap();
        let existing = dir.path().join("news").join("news_old.txt");
        fs::write(&existing, "kept as is").unwrap();

        let generator = Arc::new(EchoGenerator {
            prompts: Mutex::new(Vec::new()),
        });
        let use_case = GenerateNewsUseCase::new(generator.clone(), store, Arc::new(NoWait));
        let summary = use_case
            .execute(GenerateNewsInput::new(ModelPreferenceList::default()))
            .await
            .unwrap();

        assert_eq!(summary.discovered, 2);
        assert_eq!(summary.already_processed, 1);
        assert_eq!(summary.generated, 1);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "kept as is");
        assert_eq!(
            fs::read_to_string(dir.path().join("news").join("news_new.txt")).unwrap(),
            "Generated headline\n\nBody."
        );

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(r#"{"foo":1}"#));
    }

    #[tokio::test]
    async fn test_empty_input_dir_creates_output_and_generates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(store(dir.path()));
        let generator = Arc::new(EchoGenerator {
            prompts: Mutex::new(Vec::new()),
        });

        let summary = GenerateNewsUseCase::new(generator.clone(), store, Arc::new(NoWait))
            .execute(GenerateNewsInput::new(ModelPreferenceList::default()))
            .await
            .unwrap();

        assert_eq!(summary.generated, 0);
        assert!(generator.prompts.lock().unwrap().is_empty());
        assert!(dir.path().join("news").is_dir());
    }
}
