use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Where the participant session is kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    /// SQLite database under the data directory
    Sqlite,
    /// Process memory only; every run is a new participant
    Memory,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageBackend,
    /// Show the participant id in the header
    pub show_participant_id: bool,
    /// Redraw interval for the loading spinner
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Sqlite,
            show_participant_id: true,
            tick_rate: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlStorageConfig {
    pub backend: Option<StorageBackend>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlUiConfig {
    pub show_participant_id: Option<bool>,
    pub tick_rate_ms: Option<u64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<TomlStorageConfig>,
    pub ui: Option<TomlUiConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from a specific file; unreadable or invalid files
    /// yield the defaults
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No readable config file");
                return Config::default();
            }
        };

        match Self::from_toml_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                Config::default()
            }
        }
    }

    /// Parse TOML and merge it over the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config = toml::from_str::<TomlConfig>(contents)?;
        let mut config = Config::default();

        if let Some(storage) = toml_config.storage {
            if let Some(backend) = storage.backend {
                config.storage = backend;
            }
        }

        if let Some(ui) = toml_config.ui {
            if let Some(show) = ui.show_participant_id {
                config.show_participant_id = show;
            }
            if let Some(ms) = ui.tick_rate_ms {
                config.tick_rate = Duration::from_millis(ms.max(10));
            }
        }

        Ok(config)
    }

    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }
}
