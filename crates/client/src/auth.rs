//! API/application key authentication.
//!
//! Datadog authenticates every call with two static headers. There is no
//! session to refresh, so a rejected key surfaces directly as a 401/403
//! [`crate::ClientError::ApiError`].

use datadog_config::constants::{API_KEY_HEADER, APP_KEY_HEADER};
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// The organization API key and the user application key.
#[derive(Debug, Clone)]
pub struct ApiKeys {
    api_key: SecretString,
    app_key: SecretString,
}

impl ApiKeys {
    pub fn new(api_key: SecretString, app_key: SecretString) -> Self {
        Self { api_key, app_key }
    }

    /// True when either key is empty after trimming.
    pub fn is_incomplete(&self) -> bool {
        self.api_key.expose_secret().trim().is_empty()
            || self.app_key.expose_secret().trim().is_empty()
    }

    /// Attach both key headers to a request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(APP_KEY_HEADER, self.app_key.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(api: &str, app: &str) -> ApiKeys {
        ApiKeys::new(
            SecretString::new(api.to_string().into()),
            SecretString::new(app.to_string().into()),
        )
    }

    #[test]
    fn test_incomplete_keys() {
        assert!(!keys("api", "app").is_incomplete());
        assert!(keys("", "app").is_incomplete());
        assert!(keys("api", "   ").is_incomplete());
    }

    #[test]
    fn test_debug_does_not_leak_keys() {
        let debug = format!("{:?}", keys("api-secret-value", "app-secret-value"));
        assert!(!debug.contains("api-secret-value"));
        assert!(!debug.contains("app-secret-value"));
    }

    #[test]
    fn test_apply_sets_headers() {
        let request = keys("abc", "xyz")
            .apply(reqwest::Client::new().get("https://api.datadoghq.com/api/v1/validate"))
            .build()
            .unwrap();
        assert_eq!(request.headers()[API_KEY_HEADER], "abc");
        assert_eq!(request.headers()[APP_KEY_HEADER], "xyz");
    }
}
