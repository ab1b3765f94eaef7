//! Error types for Sibyl.
//!
//! This module provides a unified error type [`SibylError`] for all Sibyl
//! operations, along with a convenient [`Result`] type alias.
//!
//! # Error Categories
//!
//! - **Model**: artifact loading and prediction errors
//! - **Configuration**: invalid settings or missing configuration
//! - **Network**: server bind and serve errors
//!
//! A model-load failure is fatal: the process must not begin serving
//! without a loaded model. Prediction errors are handled at the request
//! boundary and never crash the running process.

use std::io;
use thiserror::Error;

/// Main error type for Sibyl operations.
#[derive(Error, Debug)]
pub enum SibylError {
    // Model errors
    #[error("Failed to load model artifact {path}: {reason}")]
    ModelLoad { path: String, reason: String },

    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("Feature dimension mismatch: model expects {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    // Network errors
    #[error("Network error: {0}")]
    Network(String),

    // External errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SibylError {
    /// Check if the error is fatal to process startup.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            SibylError::ModelLoad { .. }
                | SibylError::InvalidArtifact(_)
                | SibylError::Config(_)
                | SibylError::InvalidConfig { .. }
        )
    }
}

impl From<serde_json::Error> for SibylError {
    fn from(e: serde_json::Error) -> Self {
        SibylError::Serialization(e.to_string())
    }
}

/// Result type alias for Sibyl operations.
pub type Result<T> = std::result::Result<T, SibylError>;
