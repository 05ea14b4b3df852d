//! Configuration module for nodesel
//!
//! Holds the matching defaults (delimiter, metadata levels, case handling,
//! suggestion limit) used by the command-line front end. Configuration is
//! stored as TOML in the user's config directory; command-line flags
//! override it per invocation.

use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, CatalogOptions, DEFAULT_DELIMITER};

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NodeselConfig {
    /// Separator between path segments
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Leading levels excluded from canonical tags
    #[serde(default)]
    pub num_meta_levels: usize,

    /// Match node names ignoring case
    #[serde(default)]
    pub case_insensitive: bool,

    /// Upper bound on suggestions; unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_suggestions: Option<usize>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for NodeselConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            num_meta_levels: 0,
            case_insensitive: false,
            max_suggestions: None,
            quiet: false,
        }
    }
}

impl NodeselConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("nodesel").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Catalog options described by this configuration
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidDelimiter` if the configured delimiter is unusable.
    pub fn catalog_options(&self) -> catalog::Result<CatalogOptions> {
        Ok(CatalogOptions {
            delimiter: CatalogOptions::parse_delimiter(&self.delimiter)?,
            num_meta_levels: self.num_meta_levels,
            case_insensitive: self.case_insensitive,
        })
    }
}
