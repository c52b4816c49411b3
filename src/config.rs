//! Runtime configuration for the upstream Noko API connection.
//!
//! Everything comes from the environment (with `.env` support loaded in
//! `run()`), so a deployment only needs `NOKO_API_TOKEN` to be set.

use std::env;
use std::time::Duration;

/// Production Noko API v2 base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.nokotime.com/v2";

/// Default upstream request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the upstream API.
#[derive(Debug, Clone)]
pub struct NokoConfig {
    /// Base URL the tool paths are appended to.
    pub base_url: String,
    /// Per-request timeout applied at the HTTP client level.
    pub request_timeout: Duration,
}

impl NokoConfig {
    /// Read configuration from the environment.
    ///
    /// `NOKO_BASE_URL` overrides the production base URL (useful against a
    /// staging instance), `NOKO_TIMEOUT_SECS` overrides the request timeout.
    pub fn from_env() -> Self {
        let base_url = env::var("NOKO_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout = env::var("NOKO_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            base_url,
            request_timeout,
        }
    }
}

impl Default for NokoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Source of the Noko API token attached to every upstream request.
///
/// The dispatcher checks the provider on each call, so a token rotated in
/// the environment is picked up without a restart.
pub trait CredentialProvider: Send + Sync {
    /// The configured API token, or `None` when no usable token is set.
    fn api_token(&self) -> Option<String>;
}

/// Reads the token from the `NOKO_API_TOKEN` environment variable.
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn api_token(&self) -> Option<String> {
        env::var("NOKO_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}
