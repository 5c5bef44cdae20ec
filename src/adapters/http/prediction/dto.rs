//! Data Transfer Objects for the prediction HTTP API.
//!
//! Field names follow the dashboard's existing contract.

use serde::Serialize;

use crate::application::PredictHealthResult;
use crate::ports::ClassifierInfo;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a scored record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    /// Whether the record is classified as at risk.
    pub chronic_disease: bool,
    /// Combined score as a percentage, two decimals.
    pub confidence: f64,
    /// "Low", "Medium" or "High".
    pub risk_level: String,
    pub rule_score: f64,
    pub model_score: f64,
}

impl From<&PredictHealthResult> for PredictionResponse {
    fn from(result: &PredictHealthResult) -> Self {
        Self {
            chronic_disease: result.risk.verdict,
            confidence: result.risk.confidence_percent,
            risk_level: result.risk.risk_tier.label().to_string(),
            rule_score: result.risk.rule_score.value(),
            model_score: result.risk.model_score.value(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub classifier: ClassifierSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifierSummary {
    pub name: String,
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl From<ClassifierInfo> for HealthResponse {
    fn from(info: ClassifierInfo) -> Self {
        Self {
            status: "ok",
            classifier: ClassifierSummary {
                name: info.name,
                classes: info.classes,
                fingerprint: info.fingerprint,
            },
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}
