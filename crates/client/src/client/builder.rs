//! Client builder for constructing [`DatadogClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL and requiring both keys
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`DatadogClient`] methods)
//! - Retry logic (handled by [`crate::endpoints::send_request_with_retry`])
//!
//! # Invariants
//! - The base URL defaults to the US1 site and never ends with a slash
//! - `build()` fails with `MissingCredentials` unless both keys are non-empty

use std::time::Duration;

use datadog_config::{
    Config,
    constants::{
        DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
        MAX_MAX_RETRIES,
    },
};
use secrecy::SecretString;

use crate::auth::ApiKeys;
use crate::client::DatadogClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`DatadogClient`].
///
/// ```rust,ignore
/// use datadog_client::DatadogClient;
/// use secrecy::SecretString;
///
/// let client = DatadogClient::builder()
///     .base_url("https://api.datadoghq.eu/api".to_string())
///     .api_key(SecretString::new("api-key".to_string().into()))
///     .app_key(SecretString::new("app-key".to_string().into()))
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct DatadogClientBuilder {
    base_url: String,
    api_key: Option<SecretString>,
    app_key: Option<SecretString>,
    timeout: Duration,
    max_retries: usize,
}

impl Default for DatadogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            app_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl DatadogClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL including the `/api` prefix,
    /// e.g. `https://api.datadoghq.eu/api`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    pub fn app_key(mut self, key: SecretString) -> Self {
        self.app_key = Some(key);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry budget for HTTP 429 responses. Default is 3, maximum 10.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Copy connection settings and keys from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self.api_key = Some(config.auth.api_key.clone());
        self.app_key = Some(config.auth.app_key.clone());
        self
    }

    /// `"https://api.datadoghq.com/api/"` -> `"https://api.datadoghq.com/api"`
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`DatadogClient`].
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidUrl`] if the base URL is empty or not http(s).
    /// - [`ClientError::MissingCredentials`] if either key is missing or empty.
    /// - [`ClientError::InvalidMaxRetries`] if the retry budget exceeds `MAX_MAX_RETRIES`.
    /// - `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<DatadogClient> {
        let base_url = Self::normalize_base_url(&self.base_url);
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ClientError::InvalidUrl(format!(
                "base_url must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        if self.max_retries > MAX_MAX_RETRIES {
            return Err(ClientError::InvalidMaxRetries {
                got: self.max_retries,
                max: MAX_MAX_RETRIES,
            });
        }

        let api_key = self
            .api_key
            .ok_or_else(|| ClientError::MissingCredentials("api_key is required".to_string()))?;
        let app_key = self
            .app_key
            .ok_or_else(|| ClientError::MissingCredentials("app_key is required".to_string()))?;
        let keys = ApiKeys::new(api_key, app_key);
        if keys.is_incomplete() {
            return Err(ClientError::MissingCredentials(
                "api_key and app_key must not be empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(DatadogClient {
            http,
            base_url,
            keys,
            max_retries: self.max_retries,
        })
    }
}
