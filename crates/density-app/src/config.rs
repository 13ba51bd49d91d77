//! Configuration management for density-calc
//!
//! Config stored at: ~/.config/density-calc/config.json

use density_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Product catalog file (XLSX, CSV or TOML). Defaults to tovar.xlsx in the working directory.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("density-calc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load config from an explicit path, or default if it does not exist
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Density Calculator Configuration")?;
        writeln!(f, "================================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Catalog:        {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(default: tovar.xlsx)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            catalog_path: Some(PathBuf::from("/srv/tovar.csv")),
            output_format: OutputFormat::Json,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.catalog_path, Some(PathBuf::from("/srv/tovar.csv")));
        assert_eq!(loaded.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_format": "json"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            density_types::Error::Config(ConfigError::ParseError(_))
        ));
    }
}
