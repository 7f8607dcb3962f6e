//! Configuration structures for region resolution.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FinderError, Result};

/// Main configuration for regfind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Reference data resolution configuration.
    pub resolver: ResolverConfig,
}

/// Configuration for the reference data resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// JSON file with region, postcode prefix and city reference tables.
    pub reference_data: Option<PathBuf>,

    /// Consult postcode prefixes before region names.
    pub prefer_postcode: bool,
}

impl FinderConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| FinderError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| FinderError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: FinderConfig = serde_json::from_str("{}").unwrap();
        assert!(config.resolver.reference_data.is_none());
        assert!(!config.resolver.prefer_postcode);

        let config: FinderConfig =
            serde_json::from_str(r#"{"resolver": {"prefer_postcode": true}}"#).unwrap();
        assert!(config.resolver.prefer_postcode);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = FinderConfig::default();
        config.resolver.reference_data = Some(PathBuf::from("regions.json"));
        config.save(&path).unwrap();

        let loaded = FinderConfig::from_file(&path).unwrap();
        assert_eq!(
            loaded.resolver.reference_data,
            Some(PathBuf::from("regions.json"))
        );
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FinderConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, FinderError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = FinderConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, FinderError::Io(_)));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let err = FinderConfig::default().save(&path).unwrap_err();
        assert!(matches!(err, FinderError::Io(_)));
    }
}
