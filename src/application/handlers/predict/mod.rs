//! Prediction command handlers.

mod predict_health;

pub use predict_health::{
    PredictHealthCommand, PredictHealthError, PredictHealthHandler, PredictHealthResult,
};
