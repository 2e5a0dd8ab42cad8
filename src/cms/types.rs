//! CMS types — page records, version flag, and errors.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by CMS client operations.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required access token environment variable is not set.
    #[error("missing CMS token: env var {var} not set")]
    MissingToken { var: String },

    /// The HTTP request to the CMS failed.
    #[error("CMS request failed: {0}")]
    Request(String),

    /// The CMS returned a non-success HTTP status.
    #[error("CMS response error: status {status}")]
    Response { status: u16, body: String },

    /// The CMS response body could not be deserialized.
    #[error("CMS response parse failed: {0}")]
    Parse(String),

    /// No page exists for the requested slug and version.
    #[error("page not found: {slug}")]
    PageNotFound { slug: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ErrorCode for CmsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingToken { .. } => "E_MISSING_TOKEN",
            Self::Request(_) => "E_CMS_REQUEST",
            Self::Response { .. } => "E_CMS_RESPONSE",
            Self::Parse(_) => "E_CMS_PARSE",
            Self::PageNotFound { .. } => "E_PAGE_NOT_FOUND",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// PAGE TYPES
// =============================================================================

/// Which copy of a page to fetch: the draft under edit or the published one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    Draft,
    Published,
}

impl Version {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Version::Draft => "draft",
            Version::Published => "published",
        }
    }

    /// Parse a query-string value. Absent means published.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Option<Self> {
        match raw {
            None | Some("published") => Some(Version::Published),
            Some("draft") => Some(Version::Draft),
            Some(_) => None,
        }
    }
}

/// One page as delivered by the CMS content API. `content` is the raw block
/// tree; decoding it into typed nodes is the renderer's decode boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: serde_json::Value,
}

// =============================================================================
// PAGE SOURCE TRAIT
// =============================================================================

/// Async source of page content. Enables mocking the CMS in tests.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page by slug and version.
    ///
    /// # Errors
    ///
    /// Returns a [`CmsError`] if the request fails, the response is
    /// malformed, or no such page exists.
    async fn fetch_page(&self, slug: &str, version: Version) -> Result<PageRecord, CmsError>;
}
