//! Positive-class probability extraction.
//!
//! Trained artifacts do not encode the positive class consistently, so the
//! probability of "high risk" is recovered through an ordered chain of
//! strategies over the classifier's labels.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::{Probability, ValidationError};

/// Labels treated as the positive (high-risk) class.
pub const POSITIVE_ALIASES: [&str; 5] = ["1", "yes", "true", "positive", "high"];

/// Labels treated as the negative class.
pub const NEGATIVE_ALIASES: [&str; 5] = ["0", "no", "false", "negative", "low"];

fn normalized(label: &str) -> String {
    label.trim().to_lowercase()
}

/// True if a predicted label denotes the positive class.
pub fn is_positive_label(label: &str) -> bool {
    POSITIVE_ALIASES.contains(&normalized(label).as_str())
}

fn is_negative_label(label: &str) -> bool {
    NEGATIVE_ALIASES.contains(&normalized(label).as_str())
}

/// A per-class probability row aligned with the classifier's labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassProbabilities {
    labels: Vec<String>,
    probabilities: Vec<Probability>,
}

impl ClassProbabilities {
    /// Pairs labels with probabilities.
    ///
    /// Fails on empty rows, length mismatches, or values outside [0, 1].
    pub fn new(labels: Vec<String>, probabilities: Vec<f64>) -> Result<Self, ValidationError> {
        if labels.is_empty() {
            return Err(ValidationError::empty_field("classes"));
        }
        if labels.len() != probabilities.len() {
            return Err(ValidationError::invalid_format(
                "probabilities",
                format!(
                    "{} classes but {} probabilities",
                    labels.len(),
                    probabilities.len()
                ),
            ));
        }
        let probabilities = probabilities
            .into_iter()
            .map(Probability::try_new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            labels,
            probabilities,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn probabilities(&self) -> &[Probability] {
        &self.probabilities
    }

    pub fn is_binary(&self) -> bool {
        self.labels.len() == 2
    }

    fn find(&self, matches: fn(&str) -> bool) -> Option<Probability> {
        self.labels
            .iter()
            .position(|label| matches(label.as_str()))
            .map(|idx| self.probabilities[idx])
    }

    fn max(&self) -> Probability {
        self.probabilities
            .iter()
            .copied()
            .fold(Probability::ZERO, |best, p| if p > best { p } else { best })
    }
}

/// One step of the extraction chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// A label matched a positive alias.
    PositiveAlias,
    /// Binary model with a recognizable negative label; takes `1 - p(neg)`.
    NegativeComplement,
    /// Binary model with unrecognized labels; takes slot 1.
    BinaryPositiveSlot,
    /// Anything else; takes the highest class probability.
    MaxProbability,
    /// The classifier produced no probabilities.
    NoProbabilityFallback,
}

impl ExtractionStrategy {
    /// Strategies that indicate the artifact's labels were not understood.
    pub fn is_last_resort(&self) -> bool {
        matches!(
            self,
            ExtractionStrategy::BinaryPositiveSlot | ExtractionStrategy::MaxProbability
        )
    }
}

/// A positive-class probability and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractedProbability {
    pub probability: Probability,
    pub strategy: ExtractionStrategy,
}

pub struct ProbabilityExtractor;

impl ProbabilityExtractor {
    /// Strategies that may decline a row, in priority order.
    const CHAIN: [ExtractionStrategy; 3] = [
        ExtractionStrategy::PositiveAlias,
        ExtractionStrategy::NegativeComplement,
        ExtractionStrategy::BinaryPositiveSlot,
    ];

    /// Runs the strategy chain; the first strategy that applies wins and
    /// the highest class probability closes it.
    pub fn extract(classes: &ClassProbabilities) -> ExtractedProbability {
        let (strategy, probability) = Self::CHAIN
            .iter()
            .find_map(|&strategy| Self::apply(strategy, classes).map(|p| (strategy, p)))
            .unwrap_or_else(|| (ExtractionStrategy::MaxProbability, classes.max()));

        if strategy.is_last_resort() {
            warn!(
                strategy = ?strategy,
                labels = ?classes.labels(),
                "Classifier labels not recognized; using fallback slot"
            );
        }
        ExtractedProbability {
            probability,
            strategy,
        }
    }

    fn apply(strategy: ExtractionStrategy, classes: &ClassProbabilities) -> Option<Probability> {
        match strategy {
            ExtractionStrategy::PositiveAlias => classes.find(is_positive_label),
            ExtractionStrategy::NegativeComplement if classes.is_binary() => classes
                .find(is_negative_label)
                .map(|negative| negative.complement()),
            ExtractionStrategy::BinaryPositiveSlot if classes.is_binary() => {
                Some(classes.probabilities()[1])
            }
            _ => None,
        }
    }
}

/// What to use as the model signal when the classifier has no probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoProbabilityFallback {
    /// 1.0 if the predicted label is positive, else 0.0.
    #[default]
    PredictedLabel,
    /// Always 0.0.
    Zero,
    /// Always 0.5.
    Neutral,
}

impl NoProbabilityFallback {
    /// Whether resolving needs the classifier's predicted label.
    pub fn needs_label(&self) -> bool {
        matches!(self, NoProbabilityFallback::PredictedLabel)
    }

    /// Resolves the fallback. `label` is only read for `PredictedLabel`.
    pub fn resolve(&self, label: Option<&str>) -> ExtractedProbability {
        let probability = match self {
            NoProbabilityFallback::PredictedLabel => match label {
                Some(label) if is_positive_label(label) => Probability::ONE,
                _ => Probability::ZERO,
            },
            NoProbabilityFallback::Zero => Probability::ZERO,
            NoProbabilityFallback::Neutral => Probability::NEUTRAL,
        };
        ExtractedProbability {
            probability,
            strategy: ExtractionStrategy::NoProbabilityFallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(labels: &[&str], probabilities: &[f64]) -> ClassProbabilities {
        ClassProbabilities::new(
            labels.iter().map(|s| s.to_string()).collect(),
            probabilities.to_vec(),
        )
        .unwrap()
    }

    #[test]
    fn positive_alias_wins_regardless_of_position() {
        let extracted = ProbabilityExtractor::extract(&row(&["Yes", "No"], &[0.8, 0.2]));
        assert_eq!(extracted.probability.value(), 0.8);
        assert_eq!(extracted.strategy, ExtractionStrategy::PositiveAlias);
    }

    #[test]
    fn positive_alias_is_case_and_space_insensitive() {
        let extracted = ProbabilityExtractor::extract(&row(&["low", " HIGH "], &[0.3, 0.7]));
        assert_eq!(extracted.probability.value(), 0.7);
        assert_eq!(extracted.strategy, ExtractionStrategy::PositiveAlias);
    }

    #[test]
    fn numeric_labels_are_recognized() {
        let extracted = ProbabilityExtractor::extract(&row(&["0", "1"], &[0.65, 0.35]));
        assert_eq!(extracted.probability.value(), 0.35);
    }

    #[test]
    fn negative_complement_for_binary_models() {
        let extracted = ProbabilityExtractor::extract(&row(&["Negative", "Sick"], &[0.9, 0.1]));
        assert!((extracted.probability.value() - 0.1).abs() < 1e-12);
        assert_eq!(extracted.strategy, ExtractionStrategy::NegativeComplement);
    }

    #[test]
    fn unrecognized_binary_labels_use_slot_one() {
        let extracted = ProbabilityExtractor::extract(&row(&["A", "B"], &[0.4, 0.6]));
        assert_eq!(extracted.probability.value(), 0.6);
        assert_eq!(extracted.strategy, ExtractionStrategy::BinaryPositiveSlot);
        assert!(extracted.strategy.is_last_resort());
    }

    #[test]
    fn multiclass_without_aliases_takes_max() {
        let extracted = ProbabilityExtractor::extract(&row(&["a", "b", "c"], &[0.2, 0.5, 0.3]));
        assert_eq!(extracted.probability.value(), 0.5);
        assert_eq!(extracted.strategy, ExtractionStrategy::MaxProbability);
    }

    #[test]
    fn multiclass_negative_label_does_not_complement() {
        let extracted = ProbabilityExtractor::extract(&row(&["no", "b", "c"], &[0.6, 0.3, 0.1]));
        assert_eq!(extracted.strategy, ExtractionStrategy::MaxProbability);
        assert_eq!(extracted.probability.value(), 0.6);
    }

    #[test]
    fn single_unrecognized_class_takes_its_probability() {
        let extracted = ProbabilityExtractor::extract(&row(&["only"], &[0.42]));
        assert_eq!(extracted.probability.value(), 0.42);
        assert_eq!(extracted.strategy, ExtractionStrategy::MaxProbability);
        assert!(extracted.strategy.is_last_resort());
    }

    #[test]
    fn class_probabilities_reject_bad_shapes() {
        assert!(ClassProbabilities::new(vec![], vec![]).is_err());
        assert!(ClassProbabilities::new(vec!["a".into()], vec![0.5, 0.5]).is_err());
        assert!(ClassProbabilities::new(vec!["a".into(), "b".into()], vec![1.2, -0.2]).is_err());
    }

    #[test]
    fn predicted_label_fallback_follows_label() {
        let fallback = NoProbabilityFallback::PredictedLabel;
        assert!(fallback.needs_label());
        assert_eq!(fallback.resolve(Some("Yes")).probability, Probability::ONE);
        assert_eq!(fallback.resolve(Some("No")).probability, Probability::ZERO);
        assert_eq!(fallback.resolve(None).probability, Probability::ZERO);
        assert_eq!(
            fallback.resolve(Some("Yes")).strategy,
            ExtractionStrategy::NoProbabilityFallback
        );
    }

    #[test]
    fn constant_fallbacks_ignore_label() {
        assert_eq!(
            NoProbabilityFallback::Zero.resolve(Some("yes")).probability,
            Probability::ZERO
        );
        assert_eq!(
            NoProbabilityFallback::Neutral.resolve(Some("yes")).probability,
            Probability::NEUTRAL
        );
        assert!(!NoProbabilityFallback::Neutral.needs_label());
    }

    #[test]
    fn label_normalization() {
        assert!(is_positive_label(" True "));
        assert!(is_positive_label("1"));
        assert!(!is_positive_label("No"));
        assert!(!is_positive_label("maybe"));
    }
}
