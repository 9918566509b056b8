//! Logs pipeline endpoints (`/v1/logs/config/pipelines`, `/v1/logs/config/pipeline-order`).

use reqwest::{Client, Method};
use serde_json::Value;

use crate::auth::ApiKeys;
use crate::codec::{decode_pipeline, decode_pipelines, encode_pipeline};
use crate::endpoints::send_raw;
use crate::endpoints::url_encoding::resource_path;
use crate::error::Result;
use crate::models::{Pipeline, PipelineOrder};

const PIPELINES_PATH: &str = "/v1/logs/config/pipelines";
const PIPELINE_ORDER_PATH: &str = "/v1/logs/config/pipeline-order";

/// Get one pipeline by id.
pub async fn get_logs_pipeline(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    id: Value,
    max_retries: usize,
) -> Result<Pipeline> {
    let path = resource_path(PIPELINES_PATH, id)?;
    let body = send_raw(client, base_url, keys, Method::GET, &path, None, max_retries).await?;
    Ok(decode_pipeline(&body)?)
}

/// List every pipeline in the organization, in evaluation order.
pub async fn list_logs_pipelines(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    max_retries: usize,
) -> Result<Vec<Pipeline>> {
    let body = send_raw(
        client,
        base_url,
        keys,
        Method::GET,
        PIPELINES_PATH,
        None,
        max_retries,
    )
    .await?;
    Ok(decode_pipelines(&body)?)
}

/// Create a pipeline. The server assigns the id.
pub async fn create_logs_pipeline(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    pipeline: &Pipeline,
    max_retries: usize,
) -> Result<Pipeline> {
    let payload = encode_pipeline(pipeline)?;
    let body = send_raw(
        client,
        base_url,
        keys,
        Method::POST,
        PIPELINES_PATH,
        Some(payload),
        max_retries,
    )
    .await?;
    Ok(decode_pipeline(&body)?)
}

/// Replace a pipeline. The whole processor tree is resent.
pub async fn update_logs_pipeline(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    id: Value,
    pipeline: &Pipeline,
    max_retries: usize,
) -> Result<Pipeline> {
    let path = resource_path(PIPELINES_PATH, id)?;
    let payload = encode_pipeline(pipeline)?;
    let body = send_raw(
        client,
        base_url,
        keys,
        Method::PUT,
        &path,
        Some(payload),
        max_retries,
    )
    .await?;
    Ok(decode_pipeline(&body)?)
}

/// Delete a pipeline.
pub async fn delete_logs_pipeline(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    id: Value,
    max_retries: usize,
) -> Result<()> {
    let path = resource_path(PIPELINES_PATH, id)?;
    send_raw(client, base_url, keys, Method::DELETE, &path, None, max_retries).await?;
    Ok(())
}

/// Get the pipeline evaluation order.
pub async fn get_logs_pipeline_order(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    max_retries: usize,
) -> Result<PipelineOrder> {
    let body = send_raw(
        client,
        base_url,
        keys,
        Method::GET,
        PIPELINE_ORDER_PATH,
        None,
        max_retries,
    )
    .await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Replace the pipeline evaluation order. Every existing pipeline id must be listed.
pub async fn update_logs_pipeline_order(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    order: &PipelineOrder,
    max_retries: usize,
) -> Result<PipelineOrder> {
    let payload = serde_json::to_vec(order)?;
    let body = send_raw(
        client,
        base_url,
        keys,
        Method::PUT,
        PIPELINE_ORDER_PATH,
        Some(payload),
        max_retries,
    )
    .await?;
    Ok(serde_json::from_slice(&body)?)
}
