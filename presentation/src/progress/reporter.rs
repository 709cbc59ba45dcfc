//! Progress reporting for generation runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use newsdesk_application::ProgressNotifier;
use newsdesk_domain::{FailureKind, Model, RecordId};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// Counters shown next to the spinner
#[derive(Default)]
struct Tally {
    generated: usize,
    exhausted: usize,
    errored: usize,
}

/// Reports progress with a single spinner line
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    tally: Mutex<Tally>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            tally: Mutex::new(Tally::default()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(bar) = guard.as_ref()
        {
            f(bar);
        }
    }

    fn refresh_prefix(&self) {
        let prefix = match self.tally.lock() {
            Ok(t) => format!(
                "[{} new, {} failed, {} errors]",
                t.generated, t.exhausted, t.errored
            ),
            Err(_) => return,
        };
        self.with_bar(|bar| bar.set_prefix(prefix));
    }

    fn bump(&self, f: impl FnOnce(&mut Tally)) {
        if let Ok(mut tally) = self.tally.lock() {
            f(&mut tally);
        }
        self.refresh_prefix();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_scan_complete(&self, discovered: usize) {
        if discovered == 0 {
            return;
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.enable_steady_tick(Duration::from_millis(120));
        bar.set_message(format!("{} posts found", discovered));
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
        self.refresh_prefix();
    }

    fn on_record_start(&self, record_id: &RecordId) {
        self.with_bar(|bar| bar.set_message(format!("{}", record_id)));
    }

    fn on_model_attempt(&self, record_id: &RecordId, model: &Model) {
        self.with_bar(|bar| bar.set_message(format!("{} via {}", record_id, model)));
    }

    fn on_record_generated(&self, _record_id: &RecordId, _model: &Model, _path: &Path) {
        self.bump(|t| t.generated += 1);
    }

    fn on_record_exhausted(&self, _record_id: &RecordId) {
        self.bump(|t| t.exhausted += 1);
    }

    fn on_record_error(&self, _record_id: &RecordId, _error: &str) {
        self.bump(|t| t.errored += 1);
    }

    fn on_run_complete(&self, generated: usize) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish_with_message(format!("{} new news items", generated).green().to_string());
        }
    }
}

/// Simple text-based progress, one line per event
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_scan_complete(&self, discovered: usize) {
        println!("{} Found {} posts", "->".cyan(), discovered);
        if discovered == 0 {
            println!("   Nothing to process.");
        }
    }

    fn on_record_start(&self, record_id: &RecordId) {
        println!("{} Generating news for {}", "->".cyan(), record_id.to_string().bold());
    }

    fn on_model_attempt(&self, _record_id: &RecordId, model: &Model) {
        println!("   trying {}", model);
    }

    fn on_model_failed(
        &self,
        _record_id: &RecordId,
        model: &Model,
        kind: FailureKind,
        message: &str,
    ) {
        match kind {
            FailureKind::QuotaExceeded => println!(
                "   {} quota reached for {}, trying next model",
                "~".yellow(),
                model
            ),
            FailureKind::Other => println!("   {} {} failed: {}", "x".red(), model, message),
        }
    }

    fn on_record_generated(&self, _record_id: &RecordId, model: &Model, path: &Path) {
        println!(
            "  {} saved {} (using {})",
            "v".green(),
            path.display(),
            model
        );
    }

    fn on_record_exhausted(&self, record_id: &RecordId) {
        println!("  {} no model could generate {}", "x".red(), record_id);
    }

    fn on_record_error(&self, record_id: &RecordId, error: &str) {
        println!("  {} error processing {}: {}", "!".yellow(), record_id, error);
    }
}
