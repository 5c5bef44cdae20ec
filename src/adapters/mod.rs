//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `classifier` - Risk classifier backends and artifact loading
//! - `http` - Axum REST API

pub mod classifier;
pub mod http;

pub use classifier::{ArtifactLoader, LogisticPipelineClassifier, MockClassifier};
