//! Application layer for newsdesk
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    progress::{NoProgress, ProgressNotifier},
    record_store::{InputLocation, RecordStore, StoreError},
    text_generator::{GatewayError, TextGenerator},
    waiter::{NoWait, Waiter},
};
pub use use_cases::generate_news::{
    DEFAULT_COURTESY_DELAY, FallbackGenerator, GenerateNewsError, GenerateNewsInput,
    GenerateNewsUseCase, RunSummary,
};
pub use use_cases::scan_inputs::{InputScanner, PendingRecord, PendingRecords};
