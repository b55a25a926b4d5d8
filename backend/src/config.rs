//! Dashboard configuration file support.
//!
//! Settings are read from a TOML file and can be overridden from the
//! environment:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [dataset]
//! path = "Dataset.csv"
//! preview_rows = 20
//! ```
//!
//! Environment overrides: `HOST`, `PORT`, `DATASET_PATH`. `DASHBOARD_CONFIG`
//! points at an explicit config file.

use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::services::DEFAULT_PREVIEW_ROWS;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Dataset source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("Dataset.csv")
}

fn default_preview_rows() -> usize {
    DEFAULT_PREVIEW_ROWS
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Look for `dashboard.toml` in the usual places.
    ///
    /// Searches the current directory, `backend/` and the parent directory.
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                info!("Using configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Resolve the effective configuration: `DASHBOARD_CONFIG`, else the
    /// default locations, else built-in defaults; then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var("DASHBOARD_CONFIG") {
            Ok(path) if !path.is_empty() => Self::from_file(path)?,
            _ => Self::from_default_location()?.unwrap_or_default(),
        };
        config.with_env_overrides()
    }

    /// Apply `HOST`, `PORT` and `DATASET_PATH` from the environment.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: port.clone(),
            })?;
        }
        if let Ok(path) = env::var("DATASET_PATH") {
            self.dataset.path = PathBuf::from(path);
        }
        Ok(self)
    }

    /// Socket address the server binds to.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|_| ConfigError::InvalidValue {
            key: "server.host".to_string(),
            value: addr,
        })
    }
}
