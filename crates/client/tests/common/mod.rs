//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here sends `TEST_API_KEY` / `TEST_APP_KEY`
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use datadog_client::testing::{load_fixture, load_fixture_bytes};

#[allow(unused_imports)]
pub use datadog_client::{ClientError, DatadogClient, DecodeError};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";
#[allow(dead_code)]
pub const TEST_APP_KEY: &str = "test-app-key";

/// Client pointed at a mock server with the given 429 retry budget.
#[allow(dead_code)]
pub fn test_client_with_retries(base_url: &str, max_retries: usize) -> DatadogClient {
    DatadogClient::builder()
        .base_url(base_url.to_string())
        .api_key(SecretString::new(TEST_API_KEY.to_string().into()))
        .app_key(SecretString::new(TEST_APP_KEY.to_string().into()))
        .max_retries(max_retries)
        .build()
        .expect("client should build")
}

#[allow(dead_code)]
pub fn test_client(base_url: &str) -> DatadogClient {
    test_client_with_retries(base_url, 1)
}
