//! Model host: owns the deserialized classifier for the process lifetime.

use super::artifact::{ClassifierArtifact, LinearClassifier};
use crate::error::{Result, SibylError};
use std::path::Path;
use tracing::{info, warn};

/// Owns the loaded classifier. Immutable after [`ModelHost::load`], so a
/// single host can be shared by reference across concurrent requests
/// without locking.
#[derive(Debug)]
pub struct ModelHost {
    classifier: LinearClassifier,
}

impl ModelHost {
    /// Read and deserialize the artifact at `path`.
    ///
    /// Fails if the file is missing, unreadable, or not a valid serialized
    /// classifier. Callers must treat this as fatal to startup: the
    /// service must not accept traffic without a loaded model.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SibylError::ModelLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let artifact: ClassifierArtifact =
            serde_json::from_str(&content).map_err(|e| SibylError::ModelLoad {
                path: path.display().to_string(),
                reason: format!("invalid artifact: {}", e),
            })?;

        let classifier = LinearClassifier::from_artifact(artifact)?;

        info!(
            model = %classifier.name(),
            classes = classifier.classes().len(),
            features = classifier.num_features(),
            "Model artifact loaded"
        );

        Ok(Self { classifier })
    }

    /// Build a host around an already-validated classifier.
    pub fn from_classifier(classifier: LinearClassifier) -> Self {
        Self { classifier }
    }

    /// Predict the label for a single feature vector.
    ///
    /// Propagates the classifier's dimension-mismatch failure; nothing is
    /// validated in advance beyond what the classifier itself enforces.
    pub fn predict(&self, features: &[f64]) -> Result<&str> {
        self.classifier.predict(features).map_err(|e| {
            warn!(error = %e, "Prediction failed");
            e
        })
    }

    /// Model name from the artifact.
    pub fn model_name(&self) -> &str {
        self.classifier.name()
    }

    /// Number of classes the model predicts over.
    pub fn num_classes(&self) -> usize {
        self.classifier.classes().len()
    }

    /// Number of input features the model expects.
    pub fn num_features(&self) -> usize {
        self.classifier.num_features()
    }
}
