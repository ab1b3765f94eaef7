//! Common test utilities for integration tests.

use sibyl::model::{ClassifierArtifact, ModelHost, SCHEMA_VERSION};
use sibyl::server::build_router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test error type
pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;

/// A three-class profession model over four features, with weights chosen
/// so each class is reachable by an obvious input.
pub fn profession_artifact() -> ClassifierArtifact {
    ClassifierArtifact {
        schema_version: SCHEMA_VERSION,
        name: "profession-lr".to_string(),
        classes: vec![
            "Data Scientist".to_string(),
            "Engineer".to_string(),
            "Accountant".to_string(),
        ],
        n_features: 4,
        coefficients: vec![
            vec![1.0, 0.5, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.5],
            vec![-0.5, -0.5, -0.5, -0.5],
        ],
        intercepts: vec![0.0, 0.0, 0.5],
    }
}

/// Test environment that manages a temporary model artifact.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub model_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_artifact(&profession_artifact())
    }

    pub fn with_artifact(artifact: &ClassifierArtifact) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let model_path = temp_dir.path().join("model.json");
        let json = serde_json::to_string_pretty(artifact).expect("Failed to serialize artifact");
        std::fs::write(&model_path, json).expect("Failed to write artifact");

        Self {
            temp_dir,
            model_path,
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// A prediction service bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    _env: TestEnv,
}

impl TestServer {
    /// Load the fixture model and serve it on a random loopback port.
    pub async fn spawn() -> Self {
        let env = TestEnv::new();
        let host = Arc::new(ModelHost::load(&env.model_path).expect("Failed to load fixture model"));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let app = build_router(host);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self { addr, _env: env }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}
