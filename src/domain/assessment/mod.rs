//! Assessment Module - The risk-scoring engine.
//!
//! Pure, stateless functions that turn a raw request record into a
//! risk verdict. No ports are needed here; the classifier is consulted
//! by the application layer and its output handed back in.
//!
//! # Components
//!
//! - `RawInput` - Loosely typed request record with strict readers
//! - `vocabulary` - Synonym tables and the field normalizer
//! - `FeatureVector` - Canonical row in the classifier's schema
//! - `RuleScorer` - Additive point table over raw attributes
//! - `ProbabilityExtractor` - Positive-class probability from class rows
//! - `ScoringPolicy` - Blending, override floor, verdict and tiering

mod combiner;
mod errors;
mod feature_vector;
mod probability;
mod raw_input;
mod rule_scorer;
pub mod vocabulary;

pub use combiner::{
    RiskResult, RiskTier, ScoringPolicy, DEFAULT_MODEL_WEIGHT, DEFAULT_RULE_WEIGHT,
};
pub use errors::AssessmentError;
pub use feature_vector::{
    derive_bmi, FeatureValue, FeatureVector, Measurements, CATEGORICAL_COLUMNS, FEATURE_COLUMNS,
    NUMERIC_COLUMNS,
};
pub use probability::{
    is_positive_label, ClassProbabilities, ExtractedProbability, ExtractionStrategy,
    NoProbabilityFallback, ProbabilityExtractor, NEGATIVE_ALIASES, POSITIVE_ALIASES,
};
pub use raw_input::{Field, RawInput};
pub use rule_scorer::{RuleBreakdown, RuleInputs, RuleScorer};
pub use vocabulary::normalize;
