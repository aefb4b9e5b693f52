//! Configuration management for frakt
//!
//! Config stored at: ~/.config/fraktquote/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use frakt_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tariff file override (defaults to tariffs.toml in the config dir)
    #[serde(default)]
    pub tariff_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tariff_path: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fraktquote");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the tariff file path
    pub fn tariff_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.tariff_path {
            return Ok(path.clone());
        }
        Ok(Self::config_dir()?.join("tariffs.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::config_path()?, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.tariff_path.is_none());
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.tariff_path.is_none());
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_explicit_tariff_path_wins() {
        let config = Config {
            tariff_path: Some(PathBuf::from("/srv/frakt/tariffs.toml")),
            ..Config::default()
        };
        assert_eq!(
            config.tariff_path().unwrap(),
            PathBuf::from("/srv/frakt/tariffs.toml")
        );
    }
}
