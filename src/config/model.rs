//! Classifier artifact location

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Paths tried after any configured ones.
pub const DEFAULT_ARTIFACT_PATHS: [&str; 2] = ["models/health_model.json", "health_model.json"];

/// Where to find the trained classifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    /// Explicit artifact path, tried first
    pub artifact_path: Option<String>,

    /// Further candidates (comma-separated)
    pub search_paths: Option<String>,
}

impl ModelConfig {
    /// Every candidate in search order, without duplicates.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        let explicit = self.artifact_path.iter().map(|p| p.trim().to_string());
        let searched = self
            .search_paths
            .iter()
            .flat_map(|s| s.split(','))
            .map(|p| p.trim().to_string());
        let defaults = DEFAULT_ARTIFACT_PATHS.iter().map(|p| p.to_string());

        let mut paths: Vec<PathBuf> = Vec::new();
        for path in explicit.chain(searched).chain(defaults) {
            let path = PathBuf::from(path);
            if !path.as_os_str().is_empty() && !paths.contains(&path) {
                paths.push(path);
            }
        }
        paths
    }

    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.artifact_path {
            if path.trim().is_empty() {
                return Err(ValidationError::EmptyArtifactPath);
            }
        }
        Ok(())
    }
}
