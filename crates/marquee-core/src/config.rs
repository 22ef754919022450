//! Configuration management for marquee.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `omdb.api_key`.
pub const API_KEY_ENV: &str = "MARQUEE_OMDB_API_KEY";

/// Main configuration structure for marquee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OMDb client settings.
    pub omdb: OmdbConfig,

    /// Search behaviour.
    pub search: SearchConfig,

    /// Where favorites are stored.
    pub storage: StorageConfig,
}

/// OMDb API client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    /// Access key sent as the `apikey` query parameter.
    pub api_key: String,

    /// Endpoint base URL.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://www.omdbapi.com/".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Search-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a typed query is sent, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 150 }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the favorites store. Defaults to the marquee dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Expand tilde (~) in paths
        config.expand_tilde_in_paths();

        Ok(config)
    }

    /// Load the configuration file if it exists, otherwise use defaults.
    ///
    /// The API key environment override is applied either way.
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.omdb.api_key = key.trim().to_string();
            }
        }

        Ok(config)
    }

    fn expand_tilde_in_paths(&mut self) {
        if let Some(dir) = &self.storage.data_dir {
            let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
            self.storage.data_dir = Some(PathBuf::from(expanded));
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Directory holding the favorites store.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(crate::paths::marquee_dir)
    }

    /// The API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let key = &self.omdb.api_key;
        if key.is_empty() {
            return "(unset)".to_string();
        }
        let visible: String = key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("{}{}", "*".repeat(key.chars().count().saturating_sub(4)), visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[omdb]\napi_key = \"abcd1234\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.omdb.api_key, "abcd1234");
        assert_eq!(config.omdb.base_url, "https://www.omdbapi.com/");
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.storage.data_dir, None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.omdb.api_key = "k".to_string();
        config.search.debounce_ms = 0;
        config.storage.data_dir = Some(dir.path().join("data"));
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[omdb\n").unwrap();

        assert!(matches!(Config::load(&path), Err(crate::Error::Config(_))));
    }

    #[test]
    fn tilde_is_expanded_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndata_dir = \"~/movies\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        let data_dir = config.data_dir();
        assert!(!data_dir.to_string_lossy().starts_with('~'));
        assert!(data_dir.ends_with("movies"));
    }

    #[test]
    fn masked_api_key_hides_prefix() {
        let mut config = Config::default();
        assert_eq!(config.masked_api_key(), "(unset)");

        config.omdb.api_key = "1171b838".to_string();
        assert_eq!(config.masked_api_key(), "****b838");

        config.omdb.api_key = "abc".to_string();
        assert_eq!(config.masked_api_key(), "abc");
    }
}
