//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Model Ports
//!
//! - `RiskClassifier` - Trained classifier producing labels and class probabilities

mod risk_classifier;

pub use risk_classifier::{ClassifierError, ClassifierInfo, RiskClassifier};
