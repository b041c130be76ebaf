use serde::Deserialize;
use std::path::PathBuf;

use crate::store::DEFAULT_BASE_URL;

/// Backend configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Web API key for the Firestore project
    pub api_key: String,
    /// Firestore project id
    pub project_id: String,
    /// Collection holding the pantry records
    pub collection: String,
    /// API endpoint; point at an emulator for local development
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            collection: "pantry".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Self::default();

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        // Apply environment variable overrides
        if let Ok(api_key) = std::env::var("PANTRY_API_KEY") {
            config.api_key = api_key;
        }
        if let Ok(project_id) = std::env::var("PANTRY_PROJECT_ID") {
            config.project_id = project_id;
        }
        if let Ok(collection) = std::env::var("PANTRY_COLLECTION") {
            config.collection = collection;
        }
        if let Ok(base_url) = std::env::var("PANTRY_BASE_URL") {
            config.base_url = base_url;
        }

        Ok(config)
    }

    /// Default config file path: ~/.config/pantry/config.yaml
    pub fn default_config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".config")
            .join("pantry")
            .join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
