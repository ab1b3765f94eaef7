//! Sibyl - HTTP serving for a pre-trained linear classifier.
//!
//! Sibyl loads one serialized classifier artifact into memory at startup
//! and exposes it over HTTP: a landing page, a profession-selection page,
//! and a JSON prediction endpoint. There is no training and no model
//! management beyond that single load.
//!
//! # Architecture
//!
//! ```text
//! client ──► PredictionService (axum handlers)
//!                   │
//!                   ▼
//!             ModelHost.predict ──► label
//! ```
//!
//! The model handle is immutable after load, so concurrent requests share
//! it by reference without locking. Startup ordering is the only
//! constraint: the artifact must load successfully before the listener
//! binds.
//!
//! # Quick Start
//!
//! ```no_run
//! use sibyl::config::SibylConfig;
//!
//! #[tokio::main]
//! async fn main() -> sibyl::Result<()> {
//!     let config = SibylConfig::development();
//!     sibyl::run(config).await
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod observability;
pub mod server;

// Re-exports
pub use error::{Result, SibylError};

use config::SibylConfig;
use model::ModelHost;
use std::sync::Arc;
use tracing::{error, info};

/// Run the Sibyl server with the given configuration.
pub async fn run(config: SibylConfig) -> Result<()> {
    observability::init(&config.observability)?;

    info!(model = %config.model.path.display(), "Starting Sibyl");

    // Load the model before binding anything. A failure here is fatal:
    // the service must not accept traffic without a loaded model.
    let host = Arc::new(ModelHost::load(&config.model.path)?);

    if config.observability.metrics_enabled {
        let obs_config = config.observability.clone();
        tokio::spawn(async move {
            if let Err(e) = observability::run_metrics_server(obs_config).await {
                error!("Metrics server error: {}", e);
            }
        });
    }

    server::run_server(&config.server, host).await?;

    info!("Sibyl shutdown complete");
    Ok(())
}
