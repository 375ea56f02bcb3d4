use serde::{Deserialize, Serialize};

use crate::error::{SelectorError, SelectorResult};

/// Default by-location catalog endpoint.
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://app.wewantwaste.co.uk/api/skips/by-location";

/// Default delivery postcode baked into the selection flow.
pub const DEFAULT_POSTCODE: &str = "NR32";

/// Default delivery area baked into the selection flow.
pub const DEFAULT_AREA: &str = "Lowestoft";

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 12;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the
/// selector setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorEngineConfig {
    #[serde(default = "default_postcode")]
    pub postcode: String,
    #[serde(default = "default_area")]
    pub area: String,
    #[serde(default = "default_catalog_endpoint")]
    pub catalog_endpoint: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl SelectorEngineConfig {
    /// Creates the fixed-location default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            postcode: default_postcode(),
            area: default_area(),
            catalog_endpoint: default_catalog_endpoint(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }

    /// Sets the delivery location used for the catalog query.
    #[must_use]
    pub fn with_location(mut self, postcode: impl Into<String>, area: impl Into<String>) -> Self {
        self.postcode = postcode.into();
        self.area = area.into();
        self
    }

    /// Sets the catalog endpoint.
    #[must_use]
    pub fn with_catalog_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.catalog_endpoint = endpoint.into();
        self
    }

    /// Sets the catalog fetch timeout in seconds.
    #[must_use]
    pub fn with_fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> SelectorResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SelectorError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> SelectorResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SelectorError::InvalidData(format!("failed to parse config: {e}")))
    }

    pub(super) fn validate(&self) -> SelectorResult<()> {
        if self.postcode.trim().is_empty() {
            return Err(SelectorError::InvalidConfig(
                "postcode must not be empty".to_owned(),
            ));
        }
        if self.catalog_endpoint.trim().is_empty() {
            return Err(SelectorError::InvalidConfig(
                "catalog endpoint must not be empty".to_owned(),
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(SelectorError::InvalidConfig(
                "fetch timeout must be positive".to_owned(),
            ));
        }

        Ok(())
    }
}

impl Default for SelectorEngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_postcode() -> String {
    DEFAULT_POSTCODE.to_owned()
}

fn default_area() -> String {
    DEFAULT_AREA.to_owned()
}

fn default_catalog_endpoint() -> String {
    DEFAULT_CATALOG_ENDPOINT.to_owned()
}

fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}
