//! Generate News use case
//!
//! Runs the batch: scan pending records, walk the model fallback chain for
//! each one, persist the text and pause politely between successes.
//!
//! Records are processed strictly one after another. Nothing that happens
//! to one record affects the others; only failing to prepare the output
//! location or to list the inputs aborts the run.

use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::record_store::{RecordStore, StoreError};
use crate::ports::text_generator::TextGenerator;
use crate::ports::waiter::Waiter;
use crate::use_cases::scan_inputs::InputScanner;
use newsdesk_domain::{
    FailureKind, GenerationOutcome, InputRecord, ModelAttempt, ModelPreferenceList,
    NewsPromptTemplate, OutputArtifact, RecordId,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Pause observed after each successful write unless configured otherwise.
pub const DEFAULT_COURTESY_DELAY: Duration = Duration::from_secs(2);

/// Errors that abort a whole run
#[derive(Error, Debug)]
pub enum GenerateNewsError {
    #[error("Could not prepare output location: {0}")]
    OutputUnavailable(#[source] StoreError),

    #[error("Could not list input records: {0}")]
    ScanFailed(#[source] StoreError),
}

/// Input for the GenerateNews use case
#[derive(Debug, Clone)]
pub struct GenerateNewsInput {
    /// Models tried for every record, in order
    pub models: ModelPreferenceList,
    /// Pause after each successful write
    pub courtesy_delay: Duration,
}

impl GenerateNewsInput {
    pub fn new(models: ModelPreferenceList) -> Self {
        Self {
            models,
            courtesy_delay: DEFAULT_COURTESY_DELAY,
        }
    }

    pub fn with_courtesy_delay(mut self, delay: Duration) -> Self {
        self.courtesy_delay = delay;
        self
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Input documents found
    pub discovered: usize,
    /// Skipped because the artifact already existed
    pub already_processed: usize,
    /// Artifacts written during this run
    pub generated: usize,
    /// Records for which every model failed
    pub exhausted: usize,
    /// Records that could not be read or written
    pub errored: usize,
}

/// Tries each model in preference order until one produces text
pub struct FallbackGenerator<G: TextGenerator + ?Sized> {
    generator: Arc<G>,
    models: ModelPreferenceList,
}

impl<G: TextGenerator + ?Sized> FallbackGenerator<G> {
    pub fn new(generator: Arc<G>, models: ModelPreferenceList) -> Self {
        Self { generator, models }
    }

    pub async fn generate(&self, record: &InputRecord) -> GenerationOutcome {
        self.generate_with_progress(record, &NoProgress).await
    }

    /// Run the fallback chain for one record.
    ///
    /// Each model is called at most once. Any failure moves on to the next
    /// model; quota failures are only reported differently.
    pub async fn generate_with_progress(
        &self,
        record: &InputRecord,
        progress: &dyn ProgressNotifier,
    ) -> GenerationOutcome {
        let prompt = NewsPromptTemplate::news_item(record.content());
        let mut failed_attempts = Vec::new();

        for model in &self.models {
            progress.on_model_attempt(record.id(), model);
            debug!(record = %record.id(), model = %model, "Requesting generation");

            match self.generator.generate(model, &prompt).await {
                Ok(text) => {
                    info!("Model {} generated news for {}", model, record.id());
                    return GenerationOutcome::Success {
                        text,
                        model: model.clone(),
                        failed_attempts,
                    };
                }
                Err(e) => {
                    let attempt = ModelAttempt::failed(model.clone(), e.to_string());
                    match attempt.kind {
                        FailureKind::QuotaExceeded => {
                            warn!("Quota reached for {}, trying next model", model)
                        }
                        FailureKind::Other => warn!("Model {} failed: {}", model, e),
                    }
                    progress.on_model_failed(
                        record.id(),
                        model,
                        attempt.kind,
                        &attempt.message,
                    );
                    failed_attempts.push(attempt);
                }
            }
        }

        warn!(
            "All {} models failed for {}",
            self.models.as_slice().len(),
            record.id()
        );
        GenerationOutcome::Failure {
            record_id: record.id().clone(),
            failed_attempts,
        }
    }
}

/// Use case for turning pending records into news artifacts
pub struct GenerateNewsUseCase<G: TextGenerator + ?Sized, S: RecordStore + ?Sized> {
    generator: Arc<G>,
    store: Arc<S>,
    waiter: Arc<dyn Waiter>,
    logger: Arc<dyn GenerationLogger>,
}

impl<G: TextGenerator + ?Sized, S: RecordStore + ?Sized> GenerateNewsUseCase<G, S> {
    pub fn new(generator: Arc<G>, store: Arc<S>, waiter: Arc<dyn Waiter>) -> Self {
        Self {
            generator,
            store,
            waiter,
            logger: Arc::new(NoGenerationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: GenerateNewsInput) -> Result<RunSummary, GenerateNewsError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateNewsInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<RunSummary, GenerateNewsError> {
        if self
            .store
            .ensure_output_dir()
            .map_err(GenerateNewsError::OutputUnavailable)?
        {
            info!("Created output directory");
        }

        let scanner = InputScanner::new(self.store.as_ref());
        let mut pending = scanner
            .list_pending()
            .map_err(GenerateNewsError::ScanFailed)?;

        let mut summary = RunSummary {
            discovered: pending.discovered(),
            ..Default::default()
        };
        progress.on_scan_complete(summary.discovered);

        if summary.discovered == 0 {
            info!("Nothing to process");
            progress.on_run_complete(0);
            return Ok(summary);
        }

        info!("Model preference: {}", input.models);
        let fallback = FallbackGenerator::new(Arc::clone(&self.generator), input.models.clone());

        for item in pending.by_ref() {
            let record_id = item.record_id().clone();
            progress.on_record_start(&record_id);

            let record = match self.store.read_input(&item.location) {
                Ok(record) => record,
                Err(e) => {
                    self.report_error(&record_id, &e, progress);
                    summary.errored += 1;
                    continue;
                }
            };

            match fallback.generate_with_progress(&record, progress).await {
                GenerationOutcome::Success {
                    text,
                    model,
                    failed_attempts,
                } => {
                    self.log_failed_attempts(&record_id, &failed_attempts);
                    let artifact = OutputArtifact::new(record_id.clone(), text);
                    if artifact.is_irrelevant() {
                        debug!("{} judged irrelevant by {}", record_id, model);
                    }

                    match self.store.write_artifact(&artifact) {
                        Ok(path) => {
                            info!("Saved {} (using {})", path.display(), model);
                            self.logger.log(GenerationEvent::new(
                                "artifact_written",
                                json!({
                                    "record": record_id.as_str(),
                                    "model": model.as_str(),
                                    "path": path.display().to_string(),
                                    "bytes": artifact.text().len(),
                                    "irrelevant": artifact.is_irrelevant(),
                                }),
                            ));
                            progress.on_record_generated(&record_id, &model, &path);
                            summary.generated += 1;
                            self.waiter.wait(input.courtesy_delay).await;
                        }
                        Err(e) => {
                            self.report_error(&record_id, &e, progress);
                            summary.errored += 1;
                        }
                    }
                }
                GenerationOutcome::Failure {
                    record_id,
                    failed_attempts,
                } => {
                    self.log_failed_attempts(&record_id, &failed_attempts);
                    self.logger.log(GenerationEvent::new(
                        "record_exhausted",
                        json!({
                            "record": record_id.as_str(),
                            "attempts": failed_attempts.len(),
                        }),
                    ));
                    progress.on_record_exhausted(&record_id);
                    summary.exhausted += 1;
                }
            }
        }

        summary.already_processed = pending.already_processed();
        info!(
            "Run finished: {} generated, {} exhausted, {} errored, {} already processed",
            summary.generated, summary.exhausted, summary.errored, summary.already_processed
        );
        progress.on_run_complete(summary.generated);
        Ok(summary)
    }

    fn report_error(
        &self,
        record_id: &RecordId,
        error: &StoreError,
        progress: &dyn ProgressNotifier,
    ) {
        warn!("Error processing {}: {}", record_id, error);
        self.logger.log(GenerationEvent::new(
            "record_error",
            json!({
                "record": record_id.as_str(),
                "error": error.to_string(),
            }),
        ));
        progress.on_record_error(record_id, &error.to_string());
    }

    fn log_failed_attempts(&self, record_id: &RecordId, attempts: &[ModelAttempt]) {
        for attempt in attempts {
            self.logger.log(GenerationEvent::new(
                "model_failed",
                json!({
                    "record": record_id.as_str(),
                    "model": attempt.model.as_str(),
                    "kind": attempt.kind,
                    "message": attempt.message,
                }),
            ));
        }
    }
}
