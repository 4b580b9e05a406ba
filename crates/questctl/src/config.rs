//! questctl configuration.
//!
//! Data directory resolution order: `$QUESTLOG_DATA_DIR`, then
//! `config.toml` in the platform config directory, then the platform
//! data directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted blobs (`tasks.json`, `user.json`)
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    data_dir: Option<PathBuf>,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        let defaults = Config::default();
        Self {
            data_dir: raw.data_dir.unwrap_or(defaults.data_dir),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        if let Ok(dir) = std::env::var("QUESTLOG_DATA_DIR") {
            return Ok(Self {
                data_dir: PathBuf::from(dir),
            });
        }

        match config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        let raw: RawConfig = toml::from_str(&raw)
            .with_context(|| format!("parsing config at {}", path.display()))?;
        Ok(raw.into())
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("questlog").join("config.toml"))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("questlog"))
        .unwrap_or_else(|| PathBuf::from(".questlog"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_config_merges_defaults() {
        let raw: RawConfig = toml::from_str("").unwrap();
        let config: Config = raw.into();
        assert_eq!(config.data_dir, default_data_dir());
    }

    #[test]
    fn test_raw_config_respects_override() {
        let raw: RawConfig = toml::from_str("data_dir = \"/tmp/questlog-test\"").unwrap();
        let config: Config = raw.into();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/questlog-test"));
    }
}
