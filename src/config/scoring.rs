//! Scoring policy constants
//!
//! Defaults reproduce the deployed policy and should only change together
//! with a retrained artifact.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assessment::{
    NoProbabilityFallback, ScoringPolicy, DEFAULT_MODEL_WEIGHT, DEFAULT_RULE_WEIGHT,
};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_model_weight")]
    pub model_weight: f64,

    #[serde(default = "default_rule_weight")]
    pub rule_weight: f64,

    /// Rule score at or above which the combined score is floored
    #[serde(default = "default_override_rule_threshold")]
    pub override_rule_threshold: f64,

    #[serde(default = "default_override_floor")]
    pub override_floor: f64,

    #[serde(default = "default_verdict_threshold")]
    pub verdict_threshold: f64,

    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,

    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: f64,

    #[serde(default = "default_rule_high_threshold")]
    pub rule_high_threshold: f64,

    /// Model signal when the classifier has no probabilities
    #[serde(default)]
    pub no_probability_fallback: NoProbabilityFallback,
}

impl ScoringConfig {
    pub fn to_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            model_weight: self.model_weight,
            rule_weight: self.rule_weight,
            override_rule_threshold: self.override_rule_threshold,
            override_floor: self.override_floor,
            verdict_threshold: self.verdict_threshold,
            high_threshold: self.high_threshold,
            medium_threshold: self.medium_threshold,
            rule_high_threshold: self.rule_high_threshold,
            no_probability_fallback: self.no_probability_fallback,
        }
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let values = [
            ("model_weight", self.model_weight),
            ("rule_weight", self.rule_weight),
            ("override_rule_threshold", self.override_rule_threshold),
            ("override_floor", self.override_floor),
            ("verdict_threshold", self.verdict_threshold),
            ("high_threshold", self.high_threshold),
            ("medium_threshold", self.medium_threshold),
            ("rule_high_threshold", self.rule_high_threshold),
        ];
        for (name, value) in values {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::ScoringOutOfRange(name));
            }
        }

        let total = self.model_weight + self.rule_weight;
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ValidationError::WeightsDoNotSumToOne(total));
        }

        if self.medium_threshold > self.high_threshold {
            return Err(ValidationError::InvertedTierThresholds);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            model_weight: default_model_weight(),
            rule_weight: default_rule_weight(),
            override_rule_threshold: default_override_rule_threshold(),
            override_floor: default_override_floor(),
            verdict_threshold: default_verdict_threshold(),
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
            rule_high_threshold: default_rule_high_threshold(),
            no_probability_fallback: NoProbabilityFallback::default(),
        }
    }
}

fn default_model_weight() -> f64 {
    DEFAULT_MODEL_WEIGHT
}

fn default_rule_weight() -> f64 {
    DEFAULT_RULE_WEIGHT
}

fn default_override_rule_threshold() -> f64 {
    0.78
}

fn default_override_floor() -> f64 {
    0.75
}

fn default_verdict_threshold() -> f64 {
    0.5
}

fn default_high_threshold() -> f64 {
    0.7
}

fn default_medium_threshold() -> f64 {
    0.4
}

fn default_rule_high_threshold() -> f64 {
    0.6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_policy_defaults() {
        assert_eq!(ScoringConfig::default().to_policy(), ScoringPolicy::default());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let config = ScoringConfig {
            model_weight: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::WeightsDoNotSumToOne(_))
        ));

        let config = ScoringConfig {
            model_weight: 0.3,
            rule_weight: 0.7,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold() {
        let config = ScoringConfig {
            override_floor: 1.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::ScoringOutOfRange("override_floor"))
        );
    }

    #[test]
    fn test_nan_is_out_of_range() {
        let config = ScoringConfig {
            verdict_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_tiers() {
        let config = ScoringConfig {
            medium_threshold: 0.8,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvertedTierThresholds));
    }
}
