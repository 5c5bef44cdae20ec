//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    PredictHealthCommand, PredictHealthError, PredictHealthHandler, PredictHealthResult,
};
