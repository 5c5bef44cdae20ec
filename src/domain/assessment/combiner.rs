//! Score combination and risk tiering.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::probability::NoProbabilityFallback;
use crate::domain::foundation::Probability;

/// Coarse risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Returns the display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weights and thresholds for combining the two signals.
///
/// The defaults are compatibility constants; the rule signal dominates
/// because the trained model carries weak signal on its dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub model_weight: f64,
    pub rule_weight: f64,
    /// Rule score at or above which the combined score is floored.
    pub override_rule_threshold: f64,
    pub override_floor: f64,
    /// Inclusive.
    pub verdict_threshold: f64,
    /// Exclusive.
    pub high_threshold: f64,
    /// Exclusive.
    pub medium_threshold: f64,
    /// Inclusive. A rule score this high forces the High tier.
    pub rule_high_threshold: f64,
    pub no_probability_fallback: NoProbabilityFallback,
}

/// Model weight used when none is configured.
pub const DEFAULT_MODEL_WEIGHT: f64 = 0.15;
/// Rule weight used when none is configured.
pub const DEFAULT_RULE_WEIGHT: f64 = 0.85;

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            model_weight: DEFAULT_MODEL_WEIGHT,
            rule_weight: DEFAULT_RULE_WEIGHT,
            override_rule_threshold: 0.78,
            override_floor: 0.75,
            verdict_threshold: 0.5,
            high_threshold: 0.7,
            medium_threshold: 0.4,
            rule_high_threshold: 0.6,
            no_probability_fallback: NoProbabilityFallback::default(),
        }
    }
}

impl ScoringPolicy {
    /// Weighted blend of both signals with the high-rule floor applied.
    pub fn blend(&self, model: Probability, rule: Probability) -> Probability {
        let weighted = Probability::new(
            self.model_weight * model.value() + self.rule_weight * rule.value(),
        );
        if rule.value() >= self.override_rule_threshold {
            return Probability::new(weighted.value().max(self.override_floor));
        }
        weighted
    }

    pub fn verdict(&self, combined: Probability) -> bool {
        combined.value() >= self.verdict_threshold
    }

    pub fn tier(&self, combined: Probability, rule: Probability) -> RiskTier {
        if combined.value() > self.high_threshold || rule.value() >= self.rule_high_threshold {
            RiskTier::High
        } else if combined.value() > self.medium_threshold {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Produces the final result from the model and rule probabilities.
    pub fn combine(&self, model: Probability, rule: Probability) -> RiskResult {
        let combined = self.blend(model, rule);
        RiskResult {
            verdict: self.verdict(combined),
            confidence_percent: combined.as_percent(),
            risk_tier: self.tier(combined, rule),
            combined,
            rule_score: rule,
            model_score: model,
        }
    }
}

/// Outcome of one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskResult {
    pub verdict: bool,
    /// 0-100, two decimals.
    pub confidence_percent: f64,
    pub risk_tier: RiskTier,
    pub combined: Probability,
    pub rule_score: Probability,
    pub model_score: Probability,
}
