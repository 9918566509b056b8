//! Monitor endpoints (`/v1/monitor`).

use reqwest::{Client, Method};
use serde_json::Value;

use crate::auth::ApiKeys;
use crate::endpoints::send_raw;
use crate::endpoints::url_encoding::resource_path;
use crate::error::Result;
use crate::models::Monitor;

const MONITORS_PATH: &str = "/v1/monitor";

pub async fn get_monitor(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    id: Value,
    max_retries: usize,
) -> Result<Monitor> {
    let path = resource_path(MONITORS_PATH, id)?;
    let body = send_raw(client, base_url, keys, Method::GET, &path, None, max_retries).await?;
    Ok(serde_json::from_slice(&body)?)
}

pub async fn list_monitors(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    max_retries: usize,
) -> Result<Vec<Monitor>> {
    let body = send_raw(
        client,
        base_url,
        keys,
        Method::GET,
        MONITORS_PATH,
        None,
        max_retries,
    )
    .await?;
    Ok(serde_json::from_slice(&body)?)
}

pub async fn create_monitor(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    monitor: &Monitor,
    max_retries: usize,
) -> Result<Monitor> {
    let payload = serde_json::to_vec(monitor)?;
    let body = send_raw(
        client,
        base_url,
        keys,
        Method::POST,
        MONITORS_PATH,
        Some(payload),
        max_retries,
    )
    .await?;
    Ok(serde_json::from_slice(&body)?)
}

pub async fn update_monitor(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    id: Value,
    monitor: &Monitor,
    max_retries: usize,
) -> Result<Monitor> {
    let path = resource_path(MONITORS_PATH, id)?;
    let payload = serde_json::to_vec(monitor)?;
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
    Ok(serde_json::from_slice(&body)?)
}

pub async fn delete_monitor(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    id: Value,
    max_retries: usize,
) -> Result<()> {
    let path = resource_path(MONITORS_PATH, id)?;
    send_raw(client, base_url, keys, Method::DELETE, &path, None, max_retries).await?;
    Ok(())
}
