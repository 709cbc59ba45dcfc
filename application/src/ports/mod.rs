//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod generation_logger;
pub mod progress;
pub mod record_store;
pub mod text_generator;
pub mod waiter;
