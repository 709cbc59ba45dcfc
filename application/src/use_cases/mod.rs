//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_news;
pub mod scan_inputs;

#[cfg(test)]
pub(crate) mod test_support;
