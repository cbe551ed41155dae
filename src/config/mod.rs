#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_timeout() -> u64 {
    30
}

/// Carrier settings the host platform would hold in its config store,
/// carried here as an explicit value object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierConfig {
    pub active: bool,
    pub title: String,
    pub api_key: String,
    pub gateway_url: String,
    pub origin_postcode: String,
    /// Per-request HTTP timeout.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    carrier: CarrierConfig,
}

impl CarrierConfig {
    /// Loads the `[carrier]` table from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        Ok(file.carrier)
    }
}

impl Validate for CarrierConfig {
    fn validate(&self) -> Result<()> {
        // An inactive carrier is never exercised, so its remaining values
        // do not have to be usable.
        if !self.active {
            return Ok(());
        }

        validate_url("gateway_url", &self.gateway_url)?;
        validate_non_empty("api_key", &self.api_key)?;
        validate_non_empty("origin_postcode", &self.origin_postcode)?;

        Ok(())
    }
}
