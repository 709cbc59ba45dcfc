//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - text-generation model identifiers
//! - [`failure::FailureKind`] - quota vs. other generation failures
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod failure;
pub mod model;
