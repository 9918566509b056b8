//! Logs pipeline API methods for [`DatadogClient`].
//!
//! # What this module handles:
//! - CRUD on pipelines
//! - Reading and replacing the pipeline evaluation order
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])

use serde_json::Value;

use crate::client::DatadogClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Pipeline, PipelineOrder};

impl DatadogClient {
    /// Get a pipeline by id (string or integer).
    pub async fn get_logs_pipeline(&self, id: impl Into<Value>) -> Result<Pipeline> {
        endpoints::get_logs_pipeline(
            &self.http,
            &self.base_url,
            &self.keys,
            id.into(),
            self.max_retries,
        )
        .await
    }

    pub async fn list_logs_pipelines(&self) -> Result<Vec<Pipeline>> {
        endpoints::list_logs_pipelines(&self.http, &self.base_url, &self.keys, self.max_retries)
            .await
    }

    /// Create a pipeline and return it as stored, with its new id.
    pub async fn create_logs_pipeline(&self, pipeline: &Pipeline) -> Result<Pipeline> {
        endpoints::create_logs_pipeline(
            &self.http,
            &self.base_url,
            &self.keys,
            pipeline,
            self.max_retries,
        )
        .await
    }

    pub async fn update_logs_pipeline(
        &self,
        id: impl Into<Value>,
        pipeline: &Pipeline,
    ) -> Result<Pipeline> {
        endpoints::update_logs_pipeline(
            &self.http,
            &self.base_url,
            &self.keys,
            id.into(),
            pipeline,
            self.max_retries,
        )
        .await
    }

    pub async fn delete_logs_pipeline(&self, id: impl Into<Value>) -> Result<()> {
        endpoints::delete_logs_pipeline(
            &self.http,
            &self.base_url,
            &self.keys,
            id.into(),
            self.max_retries,
        )
        .await
    }

    pub async fn get_logs_pipeline_order(&self) -> Result<PipelineOrder> {
        endpoints::get_logs_pipeline_order(&self.http, &self.base_url, &self.keys, self.max_retries)
            .await
    }

    pub async fn update_logs_pipeline_order(&self, order: &PipelineOrder) -> Result<PipelineOrder> {
        endpoints::update_logs_pipeline_order(
            &self.http,
            &self.base_url,
            &self.keys,
            order,
            self.max_retries,
        )
        .await
    }
}
