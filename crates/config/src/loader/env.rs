//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `DATADOG_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::{ConfigLoader, validate_max_retries};
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none("DATADOG_HOST") {
        loader.set_base_url(Some(host));
    }
    if let Some(key) = env_var_or_none("DATADOG_API_KEY") {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(key) = env_var_or_none("DATADOG_APP_KEY") {
        loader.set_app_key(Some(SecretString::new(key.into())));
    }
    if let Some(timeout) = env_var_or_none("DATADOG_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "DATADOG_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none("DATADOG_MAX_RETRIES") {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: "DATADOG_MAX_RETRIES".to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        validate_max_retries(value)?;
        loader.set_max_retries(Some(value));
    }
    Ok(())
}
