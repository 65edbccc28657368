//! YAML Configuration File Support for LostFound
//!
//! Loads the service configuration (report validation, match ranking and an
//! optional location catalog override) from a single YAML file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # LostFound Service Configuration
//! version: "1.0"
//! name: "campus"
//!
//! ingest:
//!   version: 1
//!   strip_control_chars: true
//!   strict_event_time: false
//!   require_contact: true
//!   max_detail_entries: 32
//!
//! matcher:
//!   version: "v1"
//!   max_results: 20
//!   min_score: 10
//!   explain: false
//!
//! catalog:
//!   locations:
//!     - building_name: "UB"
//!       floor_number: "4"
//!       description: "Entrance Lobby"
//!     - building_name: "Java"
//!
//! seed_sample_data: true
//! ```

use std::fs;
use std::path::Path;

use catalog::{Location, LocationCatalog};
use ingest::IngestConfig;
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the LostFound service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LostFoundConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Report validation policy
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Match ranking policy
    #[serde(default)]
    pub matcher: MatchConfig,

    /// Location catalog override
    #[serde(default)]
    pub catalog: CatalogYamlConfig,

    /// Load the demo reports on startup
    #[serde(default)]
    pub seed_sample_data: bool,
}

/// Catalog section. When `locations` is absent the built-in campus catalog is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogYamlConfig {
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
}

impl CatalogYamlConfig {
    pub fn build(&self) -> LocationCatalog {
        match &self.locations {
            Some(locations) => LocationCatalog::with_locations(locations.clone()),
            None => LocationCatalog::default(),
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        let Some(locations) = &self.locations else {
            return Ok(());
        };
        if let Some(pos) = locations
            .iter()
            .position(|loc| loc.building_name.trim().is_empty())
        {
            return Err(ConfigLoadError::Validation(format!(
                "catalog.locations[{pos}].building_name must not be empty"
            )));
        }
        Ok(())
    }
}

impl LostFoundConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: LostFoundConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.ingest
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("ingest: {e}")))?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;
        self.catalog.validate()?;

        Ok(())
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for LostFoundConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            ingest: IngestConfig::default(),
            matcher: MatchConfig::default(),
            catalog: CatalogYamlConfig::default(),
            seed_sample_data: false,
        }
    }
}
