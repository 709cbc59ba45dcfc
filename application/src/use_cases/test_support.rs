//! In-memory fakes shared by the use case tests.

use crate::ports::record_store::{InputLocation, RecordStore, StoreError};
use crate::ports::text_generator::{GatewayError, TextGenerator};
use crate::ports::waiter::Waiter;
use async_trait::async_trait;
use newsdesk_domain::{InputRecord, Model, OutputArtifact, RecordId};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

/// Record store backed by maps
pub struct MemoryStore {
    inputs: Vec<(String, String)>,
    artifacts: Mutex<BTreeMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            artifacts: Mutex::new(BTreeMap::new()),
            fail_writes: false,
        }
    }

    pub fn with_input(mut self, id: &str, raw_json: &str) -> Self {
        self.inputs.push((id.to_string(), raw_json.to_string()));
        self
    }

    pub fn with_artifact(self, file_name: &str, text: &str) -> Self {
        self.put_artifact(file_name, text);
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn put_artifact(&self, file_name: &str, text: &str) {
        self.artifacts
            .lock()
            .unwrap()
            .insert(file_name.to_string(), text.to_string());
    }

    pub fn artifact(&self, file_name: &str) -> Option<String> {
        self.artifacts.lock().unwrap().get(file_name).cloned()
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts.lock().unwrap().len()
    }
}

impl RecordStore for MemoryStore {
    fn list_inputs(&self) -> Result<Vec<InputLocation>, StoreError> {
        Ok(self
            .inputs
            .iter()
            .map(|(id, _)| InputLocation {
                record_id: RecordId::new(id.as_str()).unwrap(),
                path: PathBuf::from(format!("mem/{id}.json")),
            })
            .collect())
    }

    fn artifact_exists(&self, file_name: &str) -> bool {
        self.artifacts.lock().unwrap().contains_key(file_name)
    }

    fn read_input(&self, location: &InputLocation) -> Result<InputRecord, StoreError> {
        let raw = self
            .inputs
            .iter()
            .find(|(id, _)| id == location.record_id.as_str())
            .map(|(_, raw)| raw.clone())
            .unwrap_or_default();
        let payload = serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
            path: location.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(InputRecord::from_json(location.record_id.clone(), payload))
    }

    fn write_artifact(&self, artifact: &OutputArtifact) -> Result<PathBuf, StoreError> {
        let path = PathBuf::from(format!("mem/{}", artifact.file_name()));
        if self.fail_writes {
            return Err(StoreError::Io {
                path,
                source: std::io::Error::other("disk full"),
            });
        }
        self.put_artifact(&artifact.file_name(), artifact.text());
        Ok(path)
    }

    fn ensure_output_dir(&self) -> Result<bool, StoreError> {
        Ok(false)
    }
}

/// Generator that replays scripted results per model and records every call
pub struct ScriptedGenerator {
    scripts: Mutex<HashMap<String, VecDeque<Result<String, String>>>>,
    calls: Mutex<Vec<(Model, String)>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeds(self, model: &str, text: &str) -> Self {
        self.push(model, Ok(text.to_string()))
    }

    pub fn fails(self, model: &str, message: &str) -> Self {
        self.push(model, Err(message.to_string()))
    }

    fn push(self, model: &str, result: Result<String, String>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .entry(model.to_string())
            .or_default()
            .push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<(Model, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called_models(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|(model, _)| model.to_string())
            .collect()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, model: &Model, prompt: &str) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.clone(), prompt.to_string()));
        let next = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(model.as_str())
            .and_then(|queue| queue.pop_front());
        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(GatewayError::RequestFailed(message)),
            None => Err(GatewayError::ModelNotAvailable(model.to_string())),
        }
    }
}

/// Waiter that records requested delays without sleeping
pub struct RecordingWaiter {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingWaiter {
    pub fn new() -> Self {
        Self {
            waits: Mutex::new(Vec::new()),
        }
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Waiter for RecordingWaiter {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}
