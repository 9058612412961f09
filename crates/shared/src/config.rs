//! Configuration types for the shelter service

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Where the HTTP listener binds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// How many kennels of each size the shelter is built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KennelLayout {
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

impl Default for KennelLayout {
    fn default() -> Self {
        Self {
            small: 16,
            medium: 10,
            large: 8,
        }
    }
}

impl KennelLayout {
    pub fn total(&self) -> usize {
        self.small + self.medium + self.large
    }
}

/// Top-level service configuration (shelter.yaml / shelter.json)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelterConfig {
    pub server: ServerConfig,
    pub kennels: KennelLayout,
    /// Admit the demo roster at startup
    pub seed_demo_animals: bool,
}

impl ShelterConfig {
    /// Load configuration from a YAML or JSON file, picked by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config: Self = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat { extension }),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject layouts the shelter cannot be built from
    pub fn validate(&self) -> Result<()> {
        let total = self.kennels.total();
        if total == 0 {
            return Err(ConfigError::InvalidLayout(
                "at least one kennel is required".to_string(),
            ));
        }
        if u32::try_from(total).is_err() {
            return Err(ConfigError::InvalidLayout(format!(
                "{} kennels exceeds the id range",
                total
            )));
        }
        Ok(())
    }

    /// `host:port` for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ShelterConfig::default();
        assert_eq!(config.kennels, KennelLayout { small: 16, medium: 10, large: 8 });
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert!(!config.seed_demo_animals);
    }

    #[test]
    fn test_yaml_parse() {
        let file = write_config(
            ".yaml",
            r#"
server:
  port: 8080
kennels:
  small: 1
  medium: 1
  large: 1
seed_demo_animals: true
"#,
        );

        let config = ShelterConfig::from_file(file.path()).unwrap();

        assert_eq!(config.server.port, 8080);
        // Missing fields fall back to defaults
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.kennels.total(), 3);
        assert!(config.seed_demo_animals);
    }

    #[test]
    fn test_json_parse() {
        let file = write_config(".json", r#"{ "kennels": { "large": 2 } }"#);

        let config = ShelterConfig::from_file(file.path()).unwrap();

        assert_eq!(config.kennels, KennelLayout { small: 16, medium: 10, large: 2 });
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".toml", "kennels = 3");

        let err = ShelterConfig::from_file(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = ShelterConfig::from_file(Path::new("/nonexistent/shelter.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_empty_layout_rejected() {
        let file = write_config(".yml", "kennels: { small: 0, medium: 0, large: 0 }\n");

        let err = ShelterConfig::from_file(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidLayout(_)));
    }
}
