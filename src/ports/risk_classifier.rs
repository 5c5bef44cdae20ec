//! Risk Classifier Port - Interface for trained classification models.
//!
//! The engine treats the trained model as an opaque capability: it can
//! predict a class label and, if supported, per-class probabilities.
//! Any backend (in-process inference, a remote model server, a test double)
//! is substitutable behind this trait.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct AlwaysLow;
//!
//! #[async_trait]
//! impl RiskClassifier for AlwaysLow {
//!     async fn predict_label(&self, _: &FeatureVector) -> Result<String, ClassifierError> {
//!         Ok("No".to_string())
//!     }
//!     async fn predict_probabilities(
//!         &self,
//!         _: &FeatureVector,
//!     ) -> Result<Option<ClassProbabilities>, ClassifierError> {
//!         Ok(None)
//!     }
//!     fn info(&self) -> ClassifierInfo {
//!         ClassifierInfo::new("always-low", vec!["No".into(), "Yes".into()])
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::assessment::{ClassProbabilities, FeatureVector};
use crate::domain::foundation::ValidationError;

/// Port for trained risk classifiers.
///
/// Implementations are immutable once constructed and shared across
/// concurrent requests.
#[async_trait]
pub trait RiskClassifier: Send + Sync {
    /// Predict the class label for one row.
    async fn predict_label(&self, features: &FeatureVector) -> Result<String, ClassifierError>;

    /// Predict per-class probabilities for one row.
    ///
    /// Returns `Ok(None)` when the backend cannot produce probabilities.
    async fn predict_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<Option<ClassProbabilities>, ClassifierError>;

    /// Describe the loaded model.
    fn info(&self) -> ClassifierInfo;
}

/// Description of a loaded classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifierInfo {
    /// Backend name.
    pub name: String,
    /// Class labels in the order the model emits them.
    pub classes: Vec<String>,
    /// Whether `predict_probabilities` returns a row.
    pub supports_probabilities: bool,
    /// Content hash of the artifact, when loaded from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl ClassifierInfo {
    pub fn new(name: impl Into<String>, classes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            classes,
            supports_probabilities: true,
            fingerprint: None,
        }
    }

    pub fn with_probabilities(mut self, supported: bool) -> Self {
        self.supports_probabilities = supported;
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }
}

/// Errors from classifier inference.
///
/// These indicate a defect in the artifact or backend, never bad user input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("Feature vector has no column '{column}'")]
    MissingColumn { column: String },

    #[error("Column '{column}' has the wrong type: expected {expected}")]
    ColumnType { column: String, expected: &'static str },

    #[error("Classifier returned malformed probabilities: {0}")]
    MalformedOutput(#[from] ValidationError),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
}

impl ClassifierError {
    pub fn inference(message: impl Into<String>) -> Self {
        ClassifierError::Inference(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        ClassifierError::Unavailable(message.into())
    }
}
