//! Model loading and prediction for Sibyl.
//!
//! One fixed artifact is loaded at process start and held, immutable, for
//! the process lifetime. Prediction is a pure function of the loaded
//! weights, so the host is shared by reference across requests.

pub mod artifact;
pub mod host;

pub use artifact::{ClassifierArtifact, LinearClassifier, SCHEMA_VERSION};
pub use host::ModelHost;
