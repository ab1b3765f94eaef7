//! Configuration module for Sibyl.

use crate::error::{Result, SibylError};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration for a Sibyl node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SibylConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Model artifact configuration.
    pub model: ModelConfig,
    /// Observability configuration.
    pub observability: ObservabilityConfig,
}

impl SibylConfig {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SibylError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| SibylError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.model.path.as_os_str().is_empty() {
            return Err(SibylError::InvalidConfig {
                field: "model.path".to_string(),
                reason: "Model artifact path must not be empty".to_string(),
            });
        }

        if self.observability.metrics_enabled && self.observability.metrics_addr.port() == 0 {
            return Err(SibylError::InvalidConfig {
                field: "observability.metrics_addr".to_string(),
                reason: "Metrics port must be non-zero when metrics are enabled".to_string(),
            });
        }

        Ok(())
    }

    /// Create a minimal development configuration.
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                bind_addr: "127.0.0.1:8080".parse().expect("valid socket address"),
            },
            model: ModelConfig {
                path: PathBuf::from("model.json"),
            },
            observability: ObservabilityConfig {
                metrics_enabled: false,
                ..ObservabilityConfig::default()
            },
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the prediction service.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().expect("valid socket address"),
        }
    }
}

/// Model artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the serialized classifier artifact, resolved relative to
    /// the working directory and read once at process start.
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("model.json"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Enable Prometheus metrics.
    pub metrics_enabled: bool,
    /// Metrics bind address.
    pub metrics_addr: SocketAddr,
    /// Log level.
    pub log_level: String,
    /// Enable JSON logging.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
            metrics_addr: "0.0.0.0:9090".parse().expect("valid socket address"),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SibylConfig::default();
        assert_eq!(config.server.bind_addr.port(), 8080);
        assert_eq!(config.model.path, PathBuf::from("model.json"));
        assert!(config.observability.metrics_enabled);
    }

    #[test]
    fn test_development_config() {
        let config = SibylConfig::development();
        assert!(config.server.bind_addr.ip().is_loopback());
        assert!(!config.observability.metrics_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_model_path() {
        let mut config = SibylConfig::development();
        config.model.path = PathBuf::new();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, SibylError::InvalidConfig { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_metrics_port() {
        let mut config = SibylConfig::development();
        config.observability.metrics_enabled = true;
        config.observability.metrics_addr = "0.0.0.0:0".parse().unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let config = SibylConfig::development();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SibylConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.server.bind_addr, config.server.bind_addr);
        assert_eq!(parsed.model.path, config.model.path);
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = SibylConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, SibylError::Config(_)));
    }
}
