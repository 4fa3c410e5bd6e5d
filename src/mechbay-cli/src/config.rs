//! CLI settings persisted between runs.
//!
//! There is a single setting today: the default catalog source used when a
//! command gets no `--catalog` flag. Stored as TOML under the platform
//! config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default catalog source: a file path or an http(s) URL.
    pub catalog: Option<String>,
}

impl Config {
    /// Location of the settings file, e.g. `~/.config/mechbay/config.toml`.
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("mechbay").join("config.toml"))
    }

    /// Read settings from disk. A file that doesn't exist yet is an empty
    /// config; an unreadable file or bad TOML is an error.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config from {}", path.display()))
            }
        };

        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write settings to disk, creating the config directory on first use.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config {
            catalog: Some("https://mechbay.example/parts.txt".to_string()),
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let reloaded: Config = toml::from_str(&text).unwrap();
        assert_eq!(
            reloaded.catalog.as_deref(),
            Some("https://mechbay.example/parts.txt")
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_default() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.catalog.is_none());
    }
}
