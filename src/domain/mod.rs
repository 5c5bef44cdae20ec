//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `assessment` - Normalization, scoring, and tiering of health-risk requests

pub mod assessment;
pub mod foundation;
