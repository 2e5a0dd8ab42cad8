//! CMS configuration parsed from environment variables.

use super::types::CmsError;

pub const DEFAULT_CMS_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CMS_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmsTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    pub base_url: String,
    pub token: String,
    pub timeouts: CmsTimeouts,
}

impl CmsConfig {
    /// Build typed CMS config from environment variables.
    ///
    /// Required:
    /// - `CMS_BASE_URL`: content API root (trailing slash tolerated)
    /// - `CMS_TOKEN_ENV` (names the env var containing the access token)
    ///
    /// Optional:
    /// - `CMS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CMS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns a [`CmsError`] if a required variable is absent.
    pub fn from_env() -> Result<Self, CmsError> {
        let base_url = std::env::var("CMS_BASE_URL")
            .map_err(|_| CmsError::ConfigParse("CMS_BASE_URL not set".into()))?
            .trim_end_matches('/')
            .to_string();

        let token_var = std::env::var("CMS_TOKEN_ENV")
            .map_err(|_| CmsError::MissingToken { var: "CMS_TOKEN_ENV".into() })?;
        let token =
            std::env::var(&token_var).map_err(|_| CmsError::MissingToken { var: token_var.clone() })?;

        let timeouts = CmsTimeouts {
            request_secs: env_parse_u64("CMS_REQUEST_TIMEOUT_SECS", DEFAULT_CMS_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("CMS_CONNECT_TIMEOUT_SECS", DEFAULT_CMS_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, token, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
