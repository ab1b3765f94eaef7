//! Serialized classifier artifact and the in-memory linear classifier.
//!
//! The artifact is a JSON document describing a fitted linear classifier:
//! per-class coefficient rows, per-class intercepts, and the class labels.
//! Binary models store a single coefficient row with exactly two classes;
//! multiclass models store one row per class. [`LinearClassifier::from_artifact`]
//! checks those shape rules once at load so prediction never has to.

use crate::error::{Result, SibylError};
use serde::{Deserialize, Serialize};

/// Current artifact schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk representation of a fitted linear classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Artifact schema version.
    pub schema_version: u32,
    /// Model name.
    pub name: String,
    /// Class labels, in the estimator's class order.
    pub classes: Vec<String>,
    /// Number of input features.
    pub n_features: usize,
    /// Coefficient rows: one row for binary models, one per class otherwise.
    pub coefficients: Vec<Vec<f64>>,
    /// Per-row intercepts.
    pub intercepts: Vec<f64>,
}

/// An immutable linear classifier ready for prediction.
///
/// Margins are computed per coefficient row:
///
/// ```text
/// margin[k] = intercepts[k] + Σ coefficients[k][i] * features[i]
/// ```
///
/// A binary model has one row; a positive margin selects `classes[1]`.
/// A multiclass model has one row per class; the first maximal margin wins.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    name: String,
    classes: Vec<String>,
    n_features: usize,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Build a classifier from a deserialized artifact, validating shape
    /// consistency.
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self> {
        if artifact.schema_version != SCHEMA_VERSION {
            return Err(SibylError::InvalidArtifact(format!(
                "unsupported schema version {} (expected {})",
                artifact.schema_version, SCHEMA_VERSION
            )));
        }

        if artifact.classes.len() < 2 {
            return Err(SibylError::InvalidArtifact(format!(
                "expected at least 2 classes, found {}",
                artifact.classes.len()
            )));
        }

        if artifact.n_features == 0 {
            return Err(SibylError::InvalidArtifact(
                "n_features must be positive".to_string(),
            ));
        }

        let rows = artifact.coefficients.len();
        let binary = artifact.classes.len() == 2;
        let expected_rows = if binary { 1 } else { artifact.classes.len() };
        if rows != expected_rows {
            return Err(SibylError::InvalidArtifact(format!(
                "expected {} coefficient rows for {} classes, found {}",
                expected_rows,
                artifact.classes.len(),
                rows
            )));
        }

        if artifact.intercepts.len() != rows {
            return Err(SibylError::InvalidArtifact(format!(
                "expected {} intercepts, found {}",
                rows,
                artifact.intercepts.len()
            )));
        }

        for (i, row) in artifact.coefficients.iter().enumerate() {
            if row.len() != artifact.n_features {
                return Err(SibylError::InvalidArtifact(format!(
                    "coefficient row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    artifact.n_features
                )));
            }
        }

        Ok(Self {
            name: artifact.name,
            classes: artifact.classes,
            n_features: artifact.n_features,
            coefficients: artifact.coefficients,
            intercepts: artifact.intercepts,
        })
    }

    /// Model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class labels.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of input features the model was trained on.
    pub fn num_features(&self) -> usize {
        self.n_features
    }

    /// Compute per-row decision margins for a single sample.
    ///
    /// Fails if the feature vector's dimensionality does not match the
    /// model; there is no validation beyond that.
    pub fn decision_function(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.n_features {
            return Err(SibylError::DimensionMismatch {
                expected: self.n_features,
                got: features.len(),
            });
        }

        let margins = self
            .coefficients
            .iter()
            .zip(self.intercepts.iter())
            .map(|(row, intercept)| {
                intercept
                    + row
                        .iter()
                        .zip(features.iter())
                        .map(|(w, x)| w * x)
                        .sum::<f64>()
            })
            .collect();

        Ok(margins)
    }

    /// Predict the class label for a single sample.
    pub fn predict(&self, features: &[f64]) -> Result<&str> {
        let margins = self.decision_function(features)?;

        let index = if self.classes.len() == 2 {
            // Binary: single margin, positive selects the second class.
            if margins[0] > 0.0 {
                1
            } else {
                0
            }
        } else {
            // Multiclass: first maximal margin wins.
            let mut best = 0;
            for (i, &margin) in margins.iter().enumerate().skip(1) {
                if margin > margins[best] {
                    best = i;
                }
            }
            best
        };

        Ok(&self.classes[index])
    }
}
