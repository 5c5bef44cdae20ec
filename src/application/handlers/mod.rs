//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod predict;

pub use predict::{
    PredictHealthCommand, PredictHealthError, PredictHealthHandler, PredictHealthResult,
};
