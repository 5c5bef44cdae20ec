//! In-process inference over an exported logistic pipeline.

use async_trait::async_trait;

use super::artifact::{ArtifactError, LogisticArtifact};
use crate::domain::assessment::{ClassProbabilities, FeatureValue, FeatureVector};
use crate::ports::{ClassifierError, ClassifierInfo, RiskClassifier};

/// Standard-scaled, one-hot encoded binary logistic regression.
#[derive(Debug, Clone)]
pub struct LogisticPipelineClassifier {
    artifact: LogisticArtifact,
    fingerprint: Option<String>,
}

impl LogisticPipelineClassifier {
    pub const NAME: &'static str = "logistic-pipeline";

    /// Wraps a validated artifact.
    pub fn new(artifact: LogisticArtifact) -> Result<Self, ArtifactError> {
        artifact.validate()?;
        Ok(Self {
            artifact,
            fingerprint: None,
        })
    }

    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    /// Probability of `classes[1]`.
    pub fn positive_probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let mut coefficients = self.artifact.coefficients.iter();
        let mut logit = self.artifact.intercept;

        for numeric in &self.artifact.numeric {
            let value = column(features, &numeric.column)?
                .as_numeric()
                .ok_or_else(|| ClassifierError::ColumnType {
                    column: numeric.column.clone(),
                    expected: "numeric",
                })?;
            let weight = next_weight(&mut coefficients)?;
            logit += weight * (value - numeric.mean) / numeric.scale;
        }

        for categorical in &self.artifact.categorical {
            let label = column(features, &categorical.column)?
                .as_label()
                .ok_or_else(|| ClassifierError::ColumnType {
                    column: categorical.column.clone(),
                    expected: "categorical",
                })?;
            for category in &categorical.categories {
                let weight = next_weight(&mut coefficients)?;
                if category == label {
                    logit += weight;
                }
            }
        }

        let probability = sigmoid(logit);
        if !probability.is_finite() {
            return Err(ClassifierError::inference("logit is not finite"));
        }
        Ok(probability)
    }
}

fn column(features: &FeatureVector, name: &str) -> Result<FeatureValue, ClassifierError> {
    features
        .value(name)
        .ok_or_else(|| ClassifierError::MissingColumn {
            column: name.to_string(),
        })
}

fn next_weight<'a>(weights: &mut impl Iterator<Item = &'a f64>) -> Result<f64, ClassifierError> {
    weights
        .next()
        .copied()
        .ok_or_else(|| ClassifierError::inference("artifact has too few coefficients"))
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[async_trait]
impl RiskClassifier for LogisticPipelineClassifier {
    async fn predict_label(&self, features: &FeatureVector) -> Result<String, ClassifierError> {
        let p = self.positive_probability(features)?;
        let index = if p >= 0.5 { 1 } else { 0 };
        Ok(self.artifact.classes[index].clone())
    }

    async fn predict_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<Option<ClassProbabilities>, ClassifierError> {
        let p = self.positive_probability(features)?;
        let row = ClassProbabilities::new(self.artifact.classes.clone(), vec![1.0 - p, p])?;
        Ok(Some(row))
    }

    fn info(&self) -> ClassifierInfo {
        let info = ClassifierInfo::new(Self::NAME, self.artifact.classes.clone());
        match &self.fingerprint {
            Some(fingerprint) => info.with_fingerprint(fingerprint.clone()),
            None => info,
        }
    }
}
