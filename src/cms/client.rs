//! CMS content API client.
//!
//! Thin HTTP wrapper over `GET {base}/v1/pages/{slug}?version=...`. Pure
//! parsing in `parse_envelope` for testability.

use std::time::Duration;

use super::config::{CmsConfig, CmsTimeouts};
use super::types::{CmsError, PageRecord, PageSource, Version};

// =============================================================================
// CLIENT
// =============================================================================

pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl CmsClient {
    /// Build a client from environment variables. See [`CmsConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns a [`CmsError`] if config is missing or the HTTP client fails
    /// to build.
    pub fn from_env() -> Result<Self, CmsError> {
        Self::from_config(CmsConfig::from_env()?)
    }

    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn from_config(config: CmsConfig) -> Result<Self, CmsError> {
        let http = build_http(config.timeouts)?;
        Ok(Self { http, base_url: config.base_url, token: config.token })
    }

    /// The configured content API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn build_http(timeouts: CmsTimeouts) -> Result<reqwest::Client, CmsError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| CmsError::HttpClientBuild(e.to_string()))
}

#[async_trait::async_trait]
impl PageSource for CmsClient {
    async fn fetch_page(&self, slug: &str, version: Version) -> Result<PageRecord, CmsError> {
        let url = format!(
            "{}/v1/pages/{slug}?version={}",
            self.base_url,
            version.as_str()
        );

        let response = self
            .http
            .get(&url)
            .header("x-api-key", &self.token)
            .send()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;

        if status == 404 {
            return Err(CmsError::PageNotFound { slug: slug.to_owned() });
        }
        if status != 200 {
            return Err(CmsError::Response { status, body: text });
        }

        parse_envelope(&text)
    }
}

// =============================================================================
// WIRE TYPES / PARSING
// =============================================================================

#[derive(serde::Deserialize)]
struct PageEnvelope {
    page: PageRecord,
}

fn parse_envelope(json: &str) -> Result<PageRecord, CmsError> {
    let envelope: PageEnvelope =
        serde_json::from_str(json).map_err(|e| CmsError::Parse(e.to_string()))?;
    Ok(envelope.page)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
