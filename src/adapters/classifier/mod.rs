//! Risk Classifier Adapters.
//!
//! Implementations of the RiskClassifier port.
//!
//! ## Available Adapters
//!
//! - `LogisticPipelineClassifier` - In-process inference over an exported logistic pipeline
//! - `MockClassifier` - Configurable mock for testing
//! - `ArtifactLoader` - Finds and loads the artifact at startup

mod artifact;
mod loader;
mod logistic;
mod mock;

pub use artifact::{
    ArtifactError, CategoricalColumn, LogisticArtifact, NumericColumn, LOGISTIC_PIPELINE_FORMAT,
};
pub use loader::{load_from, ArtifactLoadError, ArtifactLoader};
pub use logistic::LogisticPipelineClassifier;
pub use mock::{MockCall, MockClassifier};
