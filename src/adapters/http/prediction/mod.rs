//! Prediction HTTP adapter - REST API for health-risk scoring.
//!
//! Provides endpoints for:
//! - Scoring a health record
//! - Reporting liveness and the loaded classifier

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::{PredictionApiError, PredictionAppState};
pub use routes::{app_router, prediction_router, prediction_routes};
