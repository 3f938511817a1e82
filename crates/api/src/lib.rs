//! HTTP client for the storefront backend.
//! - Implements the forms pipeline's remote seam for sign-in/registration.
//! - Fetches paginated catalog data with typed errors.

use std::time::Duration;

use thiserror::Error;

pub mod auth;
pub mod catalog;

/// Client-side failure talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("backend error ({status_code}): {message}")]
    Backend { status_code: u16, message: String },
}

/// Typed client over the storefront HTTP API. Cheap to clone; all clones
/// share one connection pool and cookie store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    fallback_message: String,
}

impl ApiClient {
    /// Build a client with a cookie store so the session set at sign-in is
    /// carried on subsequent calls. `fallback_message` is the localized
    /// text used when a failure has no structured message.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        fallback_message: &str,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            fallback_message: fallback_message.to_string(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn fallback_message(&self) -> &str {
        &self.fallback_message
    }
}
