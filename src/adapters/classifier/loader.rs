//! Locates and loads the classifier artifact at startup.
//!
//! Candidates are tried in order. The first one that exists and loads
//! wins; broken candidates are logged and skipped. When nothing loads, the
//! last failure is reported.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, warn};

use super::artifact::{ArtifactError, LogisticArtifact};
use super::logistic::LogisticPipelineClassifier;
use crate::config::ModelConfig;
use crate::ports::RiskClassifier;

/// Startup failures while loading the classifier.
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("No classifier artifact found (searched: {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    #[error("Failed to load classifier artifact from {}: {source}", .path.display())]
    Failed {
        path: PathBuf,
        #[source]
        source: ArtifactError,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ordered artifact search.
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    candidates: Vec<PathBuf>,
}

impl ArtifactLoader {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.candidate_paths())
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Loads the first candidate that exists and deserializes.
    pub async fn load(&self) -> Result<LogisticPipelineClassifier, ArtifactLoadError> {
        let mut last_failure = None;

        for path in &self.candidates {
            let loaded = match fs::try_exists(path).await {
                Ok(false) => {
                    debug!(path = %path.display(), "Artifact candidate not present");
                    continue;
                }
                Ok(true) => load_from(path).await,
                Err(err) => Err(ArtifactError::from(err)),
            };

            match loaded {
                Ok(classifier) => {
                    info!(
                        path = %path.display(),
                        classes = ?classifier.info().classes,
                        "Classifier artifact loaded"
                    );
                    return Ok(classifier);
                }
                Err(source) => {
                    warn!(path = %path.display(), error = %source, "Skipping unusable artifact");
                    last_failure = Some(ArtifactLoadError::Failed {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }

        Err(last_failure.unwrap_or_else(|| ArtifactLoadError::NotFound {
            searched: self.candidates.clone(),
        }))
    }
}

/// Reads, parses and validates one artifact file.
pub async fn load_from(path: &Path) -> Result<LogisticPipelineClassifier, ArtifactError> {
    let bytes = fs::read(path).await?;
    let artifact = parse(path, &bytes)?;
    let fingerprint = format!("{:x}", Sha256::digest(&bytes));
    Ok(LogisticPipelineClassifier::new(artifact)?.with_fingerprint(fingerprint))
}

/// Parses by extension; anything other than YAML is read as JSON.
fn parse(path: &Path, bytes: &[u8]) -> Result<LogisticArtifact, ArtifactError> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        Ok(serde_yaml::from_slice(bytes)?)
    } else {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::artifact::fixtures::artifact;
    use super::*;
    use tempfile::TempDir;

    fn write_json(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, serde_json::to_vec(&artifact()).unwrap()).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_first_existing_candidate() {
        let dir = TempDir::new().unwrap();
        let present = write_json(&dir, "model.json");
        let loader = ArtifactLoader::new(vec![dir.path().join("missing.json"), present]);

        let classifier = loader.load().await.unwrap();
        let fingerprint = classifier.info().fingerprint.unwrap();
        assert_eq!(fingerprint.len(), 64);
    }

    #[tokio::test]
    async fn loads_yaml_artifacts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.yaml");
        std::fs::write(&path, serde_yaml::to_string(&artifact()).unwrap()).unwrap();

        assert!(load_from(&path).await.is_ok());
    }

    #[tokio::test]
    async fn not_found_lists_every_candidate() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let err = ArtifactLoader::new(vec![a.clone(), b.clone()])
            .load()
            .await
            .unwrap_err();

        match err {
            ArtifactLoadError::NotFound { searched } => assert_eq!(searched, vec![a, b]),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn broken_candidate_falls_through_to_next() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, b"{ not json").unwrap();
        let good = write_json(&dir, "good.json");

        let classifier = ArtifactLoader::new(vec![broken, good]).load().await.unwrap();
        assert_eq!(classifier.info().classes, vec!["No", "Yes"]);
    }

    #[tokio::test]
    async fn all_broken_reports_last_failure() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.json");
        std::fs::write(&first, b"{ not json").unwrap();
        let last = dir.path().join("last.yaml");
        std::fs::write(&last, b"format: [unclosed").unwrap();

        let err = ArtifactLoader::new(vec![first, dir.path().join("missing.json"), last.clone()])
            .load()
            .await
            .unwrap_err();

        match err {
            ArtifactLoadError::Failed { path, source } => {
                assert_eq!(path, last);
                assert!(matches!(source, ArtifactError::Yaml(_)));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn invalid_artifact_reports_reason() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        let mut bad = artifact();
        bad.coefficients.clear();
        std::fs::write(&path, serde_json::to_vec(&bad).unwrap()).unwrap();

        let err = ArtifactLoader::new(vec![path]).load().await.unwrap_err();
        assert!(err.to_string().contains("coefficients"), "{}", err);
    }

    #[test]
    fn fingerprint_depends_on_content() {
        let a = format!("{:x}", Sha256::digest(b"one"));
        let b = format!("{:x}", Sha256::digest(b"two"));
        assert_ne!(a, b);
    }
}
