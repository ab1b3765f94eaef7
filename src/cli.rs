//! Command-line interface for Sibyl.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sibyl - HTTP serving for a pre-trained linear classifier.
#[derive(Parser)]
#[command(name = "sibyl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SIBYL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SIBYL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the prediction service
    Serve {
        /// Bind address for the HTTP server
        #[arg(short, long, env = "SIBYL_BIND")]
        bind: Option<String>,

        /// Path to the model artifact
        #[arg(short, long, env = "SIBYL_MODEL")]
        model: Option<PathBuf>,

        /// Bind address for the metrics server
        #[arg(long)]
        metrics_addr: Option<String>,

        /// Disable the metrics server
        #[arg(long)]
        no_metrics: bool,
    },

    /// Run a one-shot prediction against a local artifact
    Predict {
        /// Path to the model artifact
        #[arg(short, long)]
        model: PathBuf,

        /// Comma-separated feature values (e.g. 0.5,1.2,3.0)
        #[arg(short, long)]
        features: String,
    },

    /// Validate that a model artifact loads
    Validate {
        /// Path to the model artifact
        #[arg(short, long)]
        model: PathBuf,
    },

    /// Show version information
    Version,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parse a comma-separated feature list.
pub fn parse_features(input: &str) -> Result<Vec<f64>, String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| format!("invalid feature value: {}", s))
        })
        .collect()
}
