//! Monitor API methods for [`DatadogClient`].

use serde_json::Value;

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Monitor;

impl DatadogClient {
    pub async fn get_monitor(&self, id: impl Into<Value>) -> Result<Monitor> {
        endpoints::get_monitor(
            &self.http,
            &self.base_url,
            &self.keys,
            id.into(),
            self.max_retries,
        )
        .await
    }

    pub async fn list_monitors(&self) -> Result<Vec<Monitor>> {
        endpoints::list_monitors(&self.http, &self.base_url, &self.keys, self.max_retries).await
    }

    pub async fn create_monitor(&self, monitor: &Monitor) -> Result<Monitor> {
        endpoints::create_monitor(
            &self.http,
            &self.base_url,
            &self.keys,
            monitor,
            self.max_retries,
        )
        .await
    }

    pub async fn update_monitor(&self, id: impl Into<Value>, monitor: &Monitor) -> Result<Monitor> {
        endpoints::update_monitor(
            &self.http,
            &self.base_url,
            &self.keys,
            id.into(),
            monitor,
            self.max_retries,
        )
        .await
    }

    pub async fn delete_monitor(&self, id: impl Into<Value>) -> Result<()> {
        endpoints::delete_monitor(
            &self.http,
            &self.base_url,
            &self.keys,
            id.into(),
            self.max_retries,
        )
        .await
    }
}
