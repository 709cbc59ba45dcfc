//! Progress notification port
//!
//! Defines the interface for reporting progress while a batch runs.

use newsdesk_domain::{FailureKind, Model, RecordId};
use std::path::Path;

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (plain lines, progress bars, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called once the inputs have been listed
    fn on_scan_complete(&self, discovered: usize);

    /// Called before the first model is tried for a record
    fn on_record_start(&self, record_id: &RecordId);

    /// Called before each model call
    fn on_model_attempt(&self, _record_id: &RecordId, _model: &Model) {}

    /// Called when a model call fails and the chain moves on
    fn on_model_failed(
        &self,
        _record_id: &RecordId,
        _model: &Model,
        _kind: FailureKind,
        _message: &str,
    ) {
    }

    /// Called after the artifact has been written
    fn on_record_generated(&self, record_id: &RecordId, model: &Model, path: &Path);

    /// Called when every model failed for a record
    fn on_record_exhausted(&self, record_id: &RecordId);

    /// Called when a record could not be read or written
    fn on_record_error(&self, record_id: &RecordId, error: &str);

    /// Called when the run is over
    fn on_run_complete(&self, _generated: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_scan_complete(&self, _discovered: usize) {}
    fn on_record_start(&self, _record_id: &RecordId) {}
    fn on_record_generated(&self, _record_id: &RecordId, _model: &Model, _path: &Path) {}
    fn on_record_exhausted(&self, _record_id: &RecordId) {}
    fn on_record_error(&self, _record_id: &RecordId, _error: &str) {}
}
