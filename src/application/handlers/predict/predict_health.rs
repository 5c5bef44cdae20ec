//! PredictHealthHandler - Command handler for scoring one health record.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::assessment::{
    AssessmentError, ExtractedProbability, ExtractionStrategy, FeatureVector, ProbabilityExtractor,
    RawInput, RiskResult, RuleBreakdown, RuleInputs, RuleScorer, ScoringPolicy,
};
use crate::domain::foundation::ErrorCode;
use crate::ports::{ClassifierError, ClassifierInfo, RiskClassifier};

/// Command to assess one raw record.
#[derive(Debug, Clone)]
pub struct PredictHealthCommand {
    pub record: RawInput,
}

/// Result of a successful assessment.
#[derive(Debug, Clone)]
pub struct PredictHealthResult {
    pub risk: RiskResult,
    pub rule_breakdown: RuleBreakdown,
    /// How the model probability was obtained.
    pub model_strategy: ExtractionStrategy,
    pub features: FeatureVector,
}

/// Errors from the prediction use case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictHealthError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error("Classifier failed: {0}")]
    Classifier(#[from] ClassifierError),
}

impl PredictHealthError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PredictHealthError::Assessment(err) => err.code(),
            PredictHealthError::Classifier(_) => ErrorCode::ClassifierError,
        }
    }

    /// Whether the caller sent bad input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PredictHealthError::Assessment(_))
    }
}

/// Handler for health-risk predictions.
///
/// Stateless apart from the shared classifier and policy; safe to share
/// across concurrent requests.
pub struct PredictHealthHandler {
    classifier: Arc<dyn RiskClassifier>,
    policy: ScoringPolicy,
}

impl PredictHealthHandler {
    pub fn new(classifier: Arc<dyn RiskClassifier>, policy: ScoringPolicy) -> Self {
        Self { classifier, policy }
    }

    pub fn classifier_info(&self) -> ClassifierInfo {
        self.classifier.info()
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub async fn handle(
        &self,
        cmd: PredictHealthCommand,
    ) -> Result<PredictHealthResult, PredictHealthError> {
        // 1. Normalize; any input error rejects the whole record
        let features = FeatureVector::build(&cmd.record)?;

        // 2. Rule score over the raw attributes
        let rule_inputs = RuleInputs::from_raw(&cmd.record)?;
        let rule_breakdown = RuleScorer::breakdown(&rule_inputs);
        let rule_score = RuleScorer::score(&rule_inputs);

        // 3. Model signal
        let model = self.model_probability(&features).await?;

        // 4. Blend, floor and tier
        let risk = self.policy.combine(model.probability, rule_score);

        debug!(
            rule_score = rule_score.value(),
            model_score = model.probability.value(),
            strategy = ?model.strategy,
            combined = risk.combined.value(),
            tier = %risk.risk_tier,
            "Health record assessed"
        );

        Ok(PredictHealthResult {
            risk,
            rule_breakdown,
            model_strategy: model.strategy,
            features,
        })
    }

    async fn model_probability(
        &self,
        features: &FeatureVector,
    ) -> Result<ExtractedProbability, ClassifierError> {
        if let Some(row) = self.classifier.predict_probabilities(features).await? {
            return Ok(ProbabilityExtractor::extract(&row));
        }

        let fallback = self.policy.no_probability_fallback;
        warn!(
            fallback = ?fallback,
            classifier = %self.classifier.info().name,
            "Classifier produced no probabilities; using fallback model signal"
        );

        if fallback.needs_label() {
            let label = self.classifier.predict_label(features).await?;
            Ok(fallback.resolve(Some(&label)))
        } else {
            Ok(fallback.resolve(None))
        }
    }
}
