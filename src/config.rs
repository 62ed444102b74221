//! Application configuration
//!
//! Every field has a default, so an empty file (or no file at all) gives a
//! working setup on the sample dataset.

use crate::render::LayoutConfig;
use crate::session::CameraConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Environment variable naming the configuration file for the server
pub const CONFIG_ENV: &str = "HCP_NETWORK_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Profile file (JSON or YAML); `None` uses the sample dataset
    pub data_path: Option<PathBuf>,
    /// Width of the side panel, excluded from the graph viewport
    pub panel_width: u32,
    pub http: HttpConfig,
    pub camera: CameraConfig,
    pub layout: LayoutConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            panel_width: 400,
            http: HttpConfig::default(),
            camera: CameraConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from a `.json` file, or YAML for any other extension
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&raw)?,
            _ => serde_yaml::from_str(&raw)?,
        };
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load from the file named by [`CONFIG_ENV`], or fall back to defaults
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http.address, self.http.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.data_path.is_none());
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.camera.settle_delay_ms, 100);
        assert_eq!(config.camera.zoom_level, 5.0);
        assert_eq!(config.layout.charge_strength, -250.0);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "data_path: /srv/hcp.json\nhttp:\n  port: 9000\ncamera:\n  zoom_level: 3.5\n"
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/hcp.json")));
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.address, "127.0.0.1");
        assert_eq!(config.camera.zoom_level, 3.5);
        assert_eq!(config.camera.center_duration_ms, 1000);
    }

    #[test]
    fn test_json_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"panel_width": 320, "layout": {{"auto_settle": false}}}}"#).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.panel_width, 320);
        assert!(!config.layout.auto_settle);
        assert_eq!(config.layout.iterations, 300);
    }

    #[test]
    fn test_invalid_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "http: [not, a, map]").unwrap();
        assert!(matches!(AppConfig::from_file(file.path()), Err(ConfigError::Yaml(_))));
    }
}
