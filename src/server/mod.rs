//! HTTP serving for the prediction service.
//!
//! The server is a thin translation layer: each request is stateless and
//! independent, and the only shared state is the immutable model host.

pub mod handlers;
pub mod pages;

use crate::config::ServerConfig;
use crate::error::{Result, SibylError};
use crate::model::ModelHost;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared state for request handlers. The host is loaded before the
/// listener binds and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// The loaded model, injected at construction.
    pub host: Arc<ModelHost>,
}

/// Build the service router around a loaded model host.
pub fn build_router(host: Arc<ModelHost>) -> Router {
    let state = AppState { host };

    Router::new()
        .route("/", get(handlers::home))
        .route("/index", get(handlers::profession))
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Run the prediction service until a shutdown signal arrives.
pub async fn run_server(config: &ServerConfig, host: Arc<ModelHost>) -> Result<()> {
    let app = build_router(host);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Prediction service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SibylError::Network(e.to_string()))?;

    Ok(())
}

/// Wait for SIGINT or SIGTERM.
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to install SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => info!("Received SIGTERM"),
        _ = sigint.recv() => info!("Received SIGINT"),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received Ctrl+C");
}
