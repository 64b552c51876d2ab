//! Configuration loading and management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
        }
    }
}

/// Server-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to the JSON store file.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            port: default_port(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("data/tasks.json")
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default location or return defaults.
    pub fn load_or_default() -> Self {
        // Try todo.yaml in the working directory
        if let Ok(config) = Self::load("todo.yaml") {
            return config;
        }

        // Fall back to defaults with environment variable overrides
        let mut config = Self::default();

        if let Ok(store_path) = std::env::var("TODO_STORE_PATH") {
            config.server.store_path = PathBuf::from(store_path);
        }

        if let Ok(port) = std::env::var("TODO_PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }

        config
    }

    /// Ensure the store file's parent directory exists.
    ///
    /// The file itself stays lazy: nothing creates it until the first
    /// successful write.
    pub fn ensure_store_dir(&self) -> Result<()> {
        if let Some(parent) = self.server.store_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_data_tasks_json() {
        let config = Config::default();
        assert_eq!(config.server.store_path, PathBuf::from("data/tasks.json"));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn load_reads_yaml_with_partial_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.yaml");
        std::fs::write(&path, "server:\n  port: 8080\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.server.port, 8080);
        // Unspecified fields keep their defaults
        assert_eq!(config.server.store_path, PathBuf::from("data/tasks.json"));
    }

    #[test]
    fn ensure_store_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.server.store_path = dir.path().join("nested").join("tasks.json");

        config.ensure_store_dir().unwrap();

        assert!(dir.path().join("nested").is_dir());
        assert!(!config.server.store_path.exists());
    }
}
