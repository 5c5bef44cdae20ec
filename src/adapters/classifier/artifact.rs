//! Serialized form of a trained logistic pipeline.
//!
//! The offline training job fits a standard scaler over the numeric
//! columns, a one-hot encoder over the categorical columns, and a binary
//! logistic regression. This module describes the exported parameters.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::assessment::{CATEGORICAL_COLUMNS, FEATURE_COLUMNS, NUMERIC_COLUMNS};

/// Format tag every artifact must carry.
pub const LOGISTIC_PIPELINE_FORMAT: &str = "logistic-pipeline/v1";

/// Per-candidate artifact failures.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid artifact: {0}")]
    Invalid(String),
}

impl ArtifactError {
    fn invalid(message: impl Into<String>) -> Self {
        ArtifactError::Invalid(message.into())
    }
}

/// Scaling parameters for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    pub column: String,
    pub mean: f64,
    pub scale: f64,
}

/// Encoded categories for one categorical column.
///
/// Values outside `categories` encode to all zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub column: String,
    pub categories: Vec<String>,
}

/// Exported logistic pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub format: String,
    /// Class labels; the logistic output is the probability of `classes[1]`.
    pub classes: Vec<String>,
    pub numeric: Vec<NumericColumn>,
    pub categorical: Vec<CategoricalColumn>,
    /// Numeric coefficients first, then one per category in column order.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticArtifact {
    /// Number of inputs to the linear model after encoding.
    pub fn encoded_width(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|c| c.categories.len())
                .sum::<usize>()
    }

    /// Checks the artifact against the canonical feature schema.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.format != LOGISTIC_PIPELINE_FORMAT {
            return Err(ArtifactError::invalid(format!(
                "unsupported format '{}', expected '{}'",
                self.format, LOGISTIC_PIPELINE_FORMAT
            )));
        }

        if self.classes.len() != 2 || self.classes[0] == self.classes[1] {
            return Err(ArtifactError::invalid(format!(
                "expected two distinct classes, got {:?}",
                self.classes
            )));
        }

        let mut seen = HashSet::new();
        for numeric in &self.numeric {
            if !NUMERIC_COLUMNS.contains(&numeric.column.as_str()) {
                return Err(ArtifactError::invalid(format!(
                    "'{}' is not a numeric feature",
                    numeric.column
                )));
            }
            if !numeric.mean.is_finite() || !numeric.scale.is_finite() || numeric.scale <= 0.0 {
                return Err(ArtifactError::invalid(format!(
                    "bad scaling parameters for '{}'",
                    numeric.column
                )));
            }
            if !seen.insert(numeric.column.as_str()) {
                return Err(ArtifactError::invalid(format!(
                    "duplicate column '{}'",
                    numeric.column
                )));
            }
        }

        for categorical in &self.categorical {
            if !CATEGORICAL_COLUMNS.contains(&categorical.column.as_str()) {
                return Err(ArtifactError::invalid(format!(
                    "'{}' is not a categorical feature",
                    categorical.column
                )));
            }
            if categorical.categories.is_empty() {
                return Err(ArtifactError::invalid(format!(
                    "no categories for '{}'",
                    categorical.column
                )));
            }
            if !seen.insert(categorical.column.as_str()) {
                return Err(ArtifactError::invalid(format!(
                    "duplicate column '{}'",
                    categorical.column
                )));
            }
        }

        let missing: Vec<&str> = FEATURE_COLUMNS
            .iter()
            .filter(|column| !seen.contains(*column))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(ArtifactError::invalid(format!(
                "missing feature columns {:?}",
                missing
            )));
        }

        if self.coefficients.len() != self.encoded_width() {
            return Err(ArtifactError::invalid(format!(
                "{} coefficients for {} encoded inputs",
                self.coefficients.len(),
                self.encoded_width()
            )));
        }

        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::invalid("non-finite model parameters"));
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A small, valid artifact with a mild smoking and age effect.
    pub fn artifact() -> LogisticArtifact {
        let numeric = |column: &str, mean: f64, scale: f64| NumericColumn {
            column: column.to_string(),
            mean,
            scale,
        };
        let categorical = |column: &str, categories: &[&str]| CategoricalColumn {
            column: column.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        };

        LogisticArtifact {
            format: LOGISTIC_PIPELINE_FORMAT.to_string(),
            classes: vec!["No".to_string(), "Yes".to_string()],
            numeric: vec![
                numeric("Age", 50.0, 10.0),
                numeric("Height_cm", 170.0, 10.0),
                numeric("Weight_kg", 75.0, 15.0),
                numeric("BMI", 26.0, 5.0),
                numeric("Stress_Level", 5.0, 3.0),
                numeric("Sleep_Hours", 7.0, 1.5),
            ],
            categorical: vec![
                categorical("Gender", &["Female", "Male"]),
                categorical("Smoker", &["No", "Yes"]),
                categorical("Exercise_Freq", &["1-2 times/week", "3-5 times/week", "Daily"]),
                categorical("Diet_Quality", &["Average", "Excellent", "Good", "Poor"]),
                categorical("Alcohol_Consumption", &["High", "Low", "Moderate"]),
            ],
            coefficients: vec![
                0.5, 0.0, 0.0, 0.0, 0.0, 0.0, // numeric
                0.0, 0.0, // gender
                -0.5, 0.5, // smoker
                0.0, 0.0, 0.0, // exercise
                0.0, 0.0, 0.0, 0.0, // diet
                0.0, 0.0, 0.0, // alcohol
            ],
            intercept: 0.0,
        }
    }
}
