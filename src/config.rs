//! Configuration management for yt-search.
//!
//! Handles loading configuration from JSONC files and resolving the API key
//! from the environment.

use crate::youtube::{Credential, SearchQuery};
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the YouTube Data API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "YT_SEARCH_CONFIG";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// YouTube Data API v3 key (overridden by `YOUTUBE_API_KEY`)
    pub api_key: String,
    /// Base URL for YouTube Data API
    pub base_url: String,
    /// Request timeout in seconds, 0 for none
    pub timeout_secs: u64,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// The search to run
    pub search: SearchQuery,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            timeout_secs: 30,
            log_level: "warn".to_string(),
            search: SearchQuery::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and apply environment overrides.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses `YT_SEARCH_CONFIG`
    ///   or the default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match std::env::var_os(CONFIG_PATH_ENV) {
                Some(p) => PathBuf::from(p),
                None => Self::default_config_path()?,
            },
        };

        let mut config = Self::load_file(&config_path)?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load configuration from a JSONC file without environment overrides.
    ///
    /// # Details
    /// If the file does not exist, returns default configuration.
    pub fn load_file(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))
    }

    /// Apply environment overrides.
    ///
    /// # Arguments
    /// * `lookup` - Environment accessor, `std::env::var` in production
    ///
    /// # Details
    /// A non-empty `YOUTUBE_API_KEY` replaces the file's `api_key`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            self.api_key = key;
        }
    }

    /// Resolved credential, if one is configured.
    pub fn credential(&self) -> Option<Credential> {
        Credential::new(&self.api_key)
    }

    /// Get default configuration file path.
    ///
    /// # Details
    /// Returns `$XDG_CONFIG_HOME/yt-search/config.jsonc` or `~/.config/yt-search/config.jsonc`.
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join("yt-search").join("config.jsonc"))
    }
}

/// Strip `//` comments that are not inside a string.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut in_string = false;
            let mut escaped = false;
            let bytes = line.as_bytes();
            for (i, &b) in bytes.iter().enumerate() {
                match b {
                    _ if escaped => escaped = false,
                    b'\\' if in_string => escaped = true,
                    b'"' => in_string = !in_string,
                    b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => {
                        return line[..i].trim_end();
                    }
                    _ => {}
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::models::{ResultType, VideoDuration};
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_empty());
        assert!(config.credential().is_none());
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.search.query, "python programming");
        assert_eq!(config.search.result_type, ResultType::Video);
        assert!(config.search.video_duration.is_none());
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_file(&temp_dir.path().join("absent.jsonc")).unwrap();
        assert_eq!(loaded.timeout_secs, 30);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // API key for YouTube Data API v3
            "api_key": "test_key",
            "base_url": "http://localhost:9000/v3", // local mirror
            "search": {
                "query": "rust // async",
                "max_results": 10,
                "result_type": "video",
                "video_duration": "long"
            }
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load_file(&config_path).unwrap();
        assert_eq!(loaded.api_key, "test_key");
        assert_eq!(loaded.base_url, "http://localhost:9000/v3");
        assert_eq!(loaded.search.query, "rust // async");
        assert_eq!(loaded.search.max_results, 10);
        assert_eq!(loaded.search.result_type, ResultType::Video);
        assert_eq!(loaded.search.video_duration, Some(VideoDuration::Long));
        assert_eq!(loaded.search.part, "snippet");
    }

    #[test]
    fn test_config_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");
        fs::write(&config_path, "{ not json").unwrap();

        assert!(Config::load_file(&config_path).is_err());
    }

    #[test]
    fn test_env_key_takes_precedence() {
        let mut config = Config {
            api_key: "from_file".to_string(),
            ..Config::default()
        };
        config.apply_env(|name| (name == API_KEY_ENV).then(|| "from_env".to_string()));
        assert_eq!(config.credential().unwrap().expose(), "from_env");
    }

    #[test]
    fn test_blank_env_key_is_ignored() {
        let mut config = Config {
            api_key: "from_file".to_string(),
            ..Config::default()
        };
        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config.api_key, "from_file");

        let mut empty = Config::default();
        empty.apply_env(|_| None);
        assert!(empty.credential().is_none());
    }

    #[test]
    fn test_strip_line_comments_keeps_urls() {
        let stripped = strip_line_comments(r#""url": "https://x.test/a" // trailing"#);
        assert_eq!(stripped, r#""url": "https://x.test/a""#);
    }
}
