//! HTTP adapters - REST API implementations.

pub mod prediction;

// Re-export key types for convenience
pub use prediction::{app_router, prediction_router, PredictionAppState};
