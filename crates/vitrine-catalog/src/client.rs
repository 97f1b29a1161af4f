//! HTTP client for the remote stock file.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use vitrine_core::Product;

use crate::error::CatalogError;
use crate::normalize::normalize_payload;

/// Fetches the raw catalog payload.
///
/// One request per call: failures are returned to the caller, never retried.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Downloads the stock file and parses it as JSON, bypassing caches.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnexpectedStatus`] — any non-2xx status.
    /// - [`CatalogError::Http`] — network or TLS failure, including timeouts.
    /// - [`CatalogError::Deserialize`] — the body is not valid JSON.
    pub async fn fetch_payload(&self, url: &str) -> Result<Value, CatalogError> {
        tracing::debug!(url, "fetching catalog");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|e| CatalogError::Deserialize {
            context: format!("catalog from {url}"),
            source: e,
        })
    }

    /// Fetches the stock file and normalizes it into products.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_payload`]. Malformed entries
    /// are not errors.
    pub async fn fetch_catalog(&self, url: &str) -> Result<Vec<Product>, CatalogError> {
        let payload = self.fetch_payload(url).await?;
        let products = normalize_payload(&payload);
        tracing::debug!(url, count = products.len(), "catalog normalized");
        Ok(products)
    }
}
