//! Timeboard API methods for [`DatadogClient`].
//!
//! # What this module does NOT handle:
//! - Low-level dashboard endpoint HTTP calls (in [`crate::endpoints`])

use serde_json::Value;

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Dashboard;

impl DatadogClient {
    /// Get a board by integer id or string `new_id`.
    pub async fn get_dashboard(&self, id: impl Into<Value>) -> Result<Dashboard> {
        endpoints::get_dashboard(
            &self.http,
            &self.base_url,
            &self.keys,
            id.into(),
            self.max_retries,
        )
        .await
    }

    pub async fn list_dashboards(&self) -> Result<Vec<Dashboard>> {
        endpoints::list_dashboards(&self.http, &self.base_url, &self.keys, self.max_retries).await
    }

    pub async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<Dashboard> {
        endpoints::create_dashboard(
            &self.http,
            &self.base_url,
            &self.keys,
            dashboard,
            self.max_retries,
        )
        .await
    }

    pub async fn update_dashboard(&self, id: impl Into<Value>, dashboard: &Dashboard) -> Result<()> {
        endpoints::update_dashboard(
            &self.http,
            &self.base_url,
            &self.keys,
            id.into(),
            dashboard,
            self.max_retries,
        )
        .await
    }

    pub async fn delete_dashboard(&self, id: impl Into<Value>) -> Result<()> {
        endpoints::delete_dashboard(
            &self.http,
            &self.base_url,
            &self.keys,
            id.into(),
            self.max_retries,
        )
        .await
    }
}
