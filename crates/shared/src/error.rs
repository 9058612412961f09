//! Error types for configuration loading

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format '{extension}'. Use .yaml, .yml or .json")]
    UnsupportedFormat { extension: String },

    #[error("Invalid kennel layout: {0}")]
    InvalidLayout(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
