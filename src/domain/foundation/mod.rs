//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the risk assessment domain.

mod errors;
mod probability;

pub use errors::{ErrorCode, ValidationError};
pub use probability::Probability;
