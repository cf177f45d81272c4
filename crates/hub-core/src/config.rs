//! Generation settings.
//!
//! Settings are read from a YAML file; every key is optional:
//!
//! ```yaml
//! seed: 42
//! post_count: 1000
//! donation_count: 1000
//! default_organization: "Resala Charity Organization"
//! organizations:
//!   general:
//!     - name: "Resala Charity Organization"
//!       type: "Charity"
//!       address: "12 El Tahrir St"
//!       area: "Dokki"
//!       governorate: "Giza"
//!   hospitals:
//!     - name: "Kasr Al Ainy Hospital"
//!       type: "Hospital"
//!       address: "Al Saray St"
//!       area: "Garden City"
//!       governorate: "Cairo"
//! ```

use crate::organization::Organization;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Settings that cannot produce a valid batch
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Organization pools supplied by configuration instead of the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationPools {
    #[serde(default)]
    pub general: Vec<Organization>,
    #[serde(default)]
    pub hospitals: Vec<Organization>,
}

fn default_seed() -> u64 {
    42
}

fn default_post_count() -> u32 {
    1000
}

fn default_donation_count() -> u32 {
    1000
}

/// Settings for one generation batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Seed for the batch RNG (same seed = same batch)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of posts to generate
    #[serde(default = "default_post_count")]
    pub post_count: u32,

    /// Number of donations to generate
    #[serde(default = "default_donation_count")]
    pub donation_count: u32,

    /// Name of the organization the representative views are scoped to.
    /// Defaults to the first general organization.
    #[serde(default)]
    pub default_organization: Option<String>,

    /// Replacement organization pools
    #[serde(default)]
    pub organizations: Option<OrganizationPools>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            post_count: default_post_count(),
            donation_count: default_donation_count(),
            default_organization: None,
            organizations: None,
        }
    }
}

impl HubConfig {
    /// Load config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: HubConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings can produce a batch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.donation_count > 0 && self.post_count == 0 {
            return Err(ConfigError::Invalid(format!(
                "{} donations requested but post_count is 0",
                self.donation_count
            )));
        }
        if let Some(pools) = &self.organizations {
            if pools.general.is_empty() {
                return Err(ConfigError::Invalid(
                    "organizations.general must not be empty".to_string(),
                ));
            }
            if pools.hospitals.is_empty() {
                return Err(ConfigError::Invalid(
                    "organizations.hospitals must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file settings.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        post_count: Option<u32>,
        donation_count: Option<u32>,
    ) -> Self {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(post_count) = post_count {
            self.post_count = post_count;
        }
        if let Some(donation_count) = donation_count {
            self.donation_count = donation_count;
        }
        self
    }
}
