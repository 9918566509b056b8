//! Main Datadog API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `logs_pipelines`: Logs pipeline and pipeline-order methods
//! - `monitors`: Monitor methods
//! - `dashboards`: Timeboard methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - JSON shape of pipelines (delegated to [`crate::codec`])
//!
//! # Invariants
//! - Every request carries both key headers
//! - Every id argument goes through [`crate::normalize_id`] before it reaches a URL

pub mod builder;

mod dashboards;
mod logs_pipelines;
mod monitors;

use reqwest::Method;

use crate::auth::ApiKeys;
use crate::endpoints;
use crate::error::Result;

/// Datadog REST API client.
///
/// ```rust,ignore
/// use datadog_client::DatadogClient;
/// use datadog_config::ConfigLoader;
///
/// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
/// let client = DatadogClient::builder().from_config(&config).build()?;
/// let pipeline = client.get_logs_pipeline("dbJLomG9Tz-DYnAR5w-ilA").await?;
/// ```
#[derive(Debug)]
pub struct DatadogClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) keys: ApiKeys,
    pub(crate) max_retries: usize,
}

impl DatadogClient {
    pub fn builder() -> builder::DatadogClientBuilder {
        builder::DatadogClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` (relative to the base URL) and return the raw body.
    pub async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        self.send(Method::GET, path, None).await
    }

    /// Send `method` to `path` with an optional JSON body and return the raw body.
    pub async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        endpoints::send_raw(
            &self.http,
            &self.base_url,
            &self.keys,
            method,
            path,
            body,
            self.max_retries,
        )
        .await
    }
}
