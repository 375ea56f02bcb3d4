use std::time::Duration;

use tracing::debug;

use crate::api::SelectorEngineConfig;
use crate::core::Skip;
use crate::error::{SelectorError, SelectorResult};

/// Blocking HTTP client for the by-location catalog endpoint.
///
/// One unauthenticated GET with fixed `postcode`/`area` query parameters.
/// Transport, status and decode problems map onto distinct error variants;
/// the engine collapses all of them into the same retryable failed phase.
#[derive(Debug)]
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(config: &SelectorEngineConfig) -> SelectorResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| SelectorError::CatalogRequest(format!("client init: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.catalog_endpoint.clone(),
        })
    }

    /// Fetches the full catalog for one location.
    ///
    /// No caching, no pagination, no partial results.
    pub fn fetch(&self, postcode: &str, area: &str) -> SelectorResult<Vec<Skip>> {
        debug!(endpoint = %self.endpoint, postcode, area, "fetch catalog");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("postcode", postcode), ("area", area)])
            .send()
            .map_err(|e| SelectorError::CatalogRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SelectorError::CatalogStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<Skip>>()
            .map_err(|e| SelectorError::CatalogDecode(e.to_string()))
    }
}
