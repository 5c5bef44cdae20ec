//! HTTP handlers for prediction endpoints.
//!
//! These handlers connect Axum routes to the prediction command handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::application::{PredictHealthCommand, PredictHealthError, PredictHealthHandler};
use crate::domain::assessment::{AssessmentError, RawInput};

use super::dto::{ErrorResponse, HealthResponse, PredictionResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for prediction endpoints.
#[derive(Clone)]
pub struct PredictionAppState {
    pub handler: Arc<PredictHealthHandler>,
}

impl PredictionAppState {
    pub fn new(handler: PredictHealthHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/predict/ - Score one health record
pub async fn predict_health(
    State(state): State<PredictionAppState>,
    payload: Result<Json<RawInput>, JsonRejection>,
) -> Result<impl IntoResponse, PredictionApiError> {
    let Json(record) = payload?;
    debug!(record = ?record, "Incoming prediction request");

    let result = state
        .handler
        .handle(PredictHealthCommand { record })
        .await?;

    Ok((StatusCode::OK, Json(PredictionResponse::from(&result))))
}

/// GET /health - Liveness and loaded classifier
pub async fn health(State(state): State<PredictionAppState>) -> impl IntoResponse {
    Json(HealthResponse::from(state.handler.classifier_info()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts prediction errors to HTTP responses.
#[derive(Debug)]
pub enum PredictionApiError {
    /// The body was not a JSON object.
    Body(String),
    Predict(PredictHealthError),
}

impl From<JsonRejection> for PredictionApiError {
    fn from(rejection: JsonRejection) -> Self {
        PredictionApiError::Body(rejection.body_text())
    }
}

impl From<PredictHealthError> for PredictionApiError {
    fn from(err: PredictHealthError) -> Self {
        PredictionApiError::Predict(err)
    }
}

impl IntoResponse for PredictionApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            PredictionApiError::Body(reason) => {
                warn!(reason = %reason, "Rejected malformed prediction body");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("INVALID_REQUEST", reason.clone()),
                )
            }
            PredictionApiError::Predict(PredictHealthError::Assessment(err)) => {
                warn!(field = %err.field(), error = %err, "Rejected health record");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details(
                        err.code().to_string(),
                        err.to_string(),
                        assessment_details(err),
                    ),
                )
            }
            PredictionApiError::Predict(err @ PredictHealthError::Classifier(_)) => {
                error!(error = %err, "Prediction failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(err.code().to_string(), err.to_string()),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

fn assessment_details(err: &AssessmentError) -> serde_json::Value {
    match err {
        AssessmentError::UnsupportedValue {
            field,
            value,
            allowed,
        } => json!({ "field": field, "value": value, "allowed": allowed }),
        other => json!({ "field": other.field() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ClassifierError;

    #[test]
    fn assessment_errors_are_bad_requests() {
        let err = PredictionApiError::from(PredictHealthError::Assessment(
            AssessmentError::missing_field("age"),
        ));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn classifier_errors_are_internal() {
        let err = PredictionApiError::from(PredictHealthError::Classifier(
            ClassifierError::inference("boom"),
        ));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unsupported_value_details_list_allowed_values() {
        let err = AssessmentError::unsupported_value(
            "gender",
            "X",
            vec!["f".into(), "m".into()],
        );
        let details = assessment_details(&err);
        assert_eq!(details["allowed"], json!(["f", "m"]));
        assert_eq!(details["value"], "X");
    }
}
