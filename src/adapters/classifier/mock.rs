//! Mock Risk Classifier for testing.
//!
//! Configurable implementation of the `RiskClassifier` port so the
//! engine can be exercised without a trained artifact.
//!
//! # Example
//!
//! ```ignore
//! let classifier = MockClassifier::new()
//!     .with_classes(&["No", "Yes"])
//!     .with_probabilities(&[0.8, 0.2]);
//!
//! let row = classifier.predict_probabilities(&features).await?;
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::assessment::{ClassProbabilities, FeatureVector};
use crate::ports::{ClassifierError, ClassifierInfo, RiskClassifier};

/// Which call the mock saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockCall {
    Label,
    Probabilities,
}

/// Mock classifier with fixed outputs.
#[derive(Debug, Clone)]
pub struct MockClassifier {
    classes: Vec<String>,
    probabilities: Option<Vec<f64>>,
    label: String,
    error: Option<ClassifierError>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClassifier {
    /// Binary `No`/`Yes` classifier answering an even split.
    pub fn new() -> Self {
        Self {
            classes: vec!["No".to_string(), "Yes".to_string()],
            probabilities: Some(vec![0.5, 0.5]),
            label: "No".to_string(),
            error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_classes(mut self, classes: &[&str]) -> Self {
        self.classes = classes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_probabilities(mut self, probabilities: &[f64]) -> Self {
        self.probabilities = Some(probabilities.to_vec());
        self
    }

    /// Simulates a backend that cannot produce probabilities.
    pub fn without_probabilities(mut self) -> Self {
        self.probabilities = None;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Every call fails with `error`.
    pub fn failing(mut self, error: ClassifierError) -> Self {
        self.error = Some(error);
        self
    }

    /// Returns the number of calls made to this classifier.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: MockCall) -> Result<(), ClassifierError> {
        self.calls.lock().unwrap().push(call);
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RiskClassifier for MockClassifier {
    async fn predict_label(&self, _features: &FeatureVector) -> Result<String, ClassifierError> {
        self.record(MockCall::Label)?;
        Ok(self.label.clone())
    }

    async fn predict_probabilities(
        &self,
        _features: &FeatureVector,
    ) -> Result<Option<ClassProbabilities>, ClassifierError> {
        self.record(MockCall::Probabilities)?;
        match &self.probabilities {
            Some(probabilities) => Ok(Some(ClassProbabilities::new(
                self.classes.clone(),
                probabilities.clone(),
            )?)),
            None => Ok(None),
        }
    }

    fn info(&self) -> ClassifierInfo {
        ClassifierInfo::new("mock", self.classes.clone())
            .with_probabilities(self.probabilities.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::RawInput;
    use serde_json::json;

    fn features() -> FeatureVector {
        let raw = RawInput::default()
            .with("age", json!(40))
            .with("gender", json!("female"))
            .with("height", json!(165))
            .with("weight", json!(60))
            .with("smoker", json!("no"))
            .with("exercise", json!("daily"))
            .with("diet", json!("good"))
            .with("alcohol", json!("none"))
            .with("stressLevel", json!(3))
            .with("sleepHours", json!(8));
        FeatureVector::build(&raw).unwrap()
    }

    #[tokio::test]
    async fn returns_configured_row() {
        let mock = MockClassifier::new().with_probabilities(&[0.8, 0.2]);
        let row = mock.predict_probabilities(&features()).await.unwrap().unwrap();
        assert_eq!(row.probabilities()[1].value(), 0.2);
        assert_eq!(mock.calls(), vec![MockCall::Probabilities]);
    }

    #[tokio::test]
    async fn without_probabilities_returns_none() {
        let mock = MockClassifier::new().without_probabilities().with_label("Yes");
        assert!(mock.predict_probabilities(&features()).await.unwrap().is_none());
        assert_eq!(mock.predict_label(&features()).await.unwrap(), "Yes");
        assert!(!mock.info().supports_probabilities);
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn malformed_row_is_classifier_error() {
        let mock = MockClassifier::new().with_probabilities(&[0.2, 0.3, 0.5]);
        let err = mock.predict_probabilities(&features()).await.unwrap_err();
        assert!(matches!(err, ClassifierError::MalformedOutput(_)));
    }

    #[tokio::test]
    async fn failing_mock_propagates_error() {
        let mock = MockClassifier::new().failing(ClassifierError::inference("boom"));
        assert!(mock.predict_label(&features()).await.is_err());
        assert!(mock.predict_probabilities(&features()).await.is_err());
    }
}
