//! Timeboard endpoints (`/v1/dash`).
//!
//! Single-board responses are wrapped as `{"dash": {...}}`; the list is
//! `{"dashes": [...]}`.

use reqwest::{Client, Method};
use serde_json::Value;

use crate::auth::ApiKeys;
use crate::endpoints::send_raw;
use crate::endpoints::url_encoding::resource_path;
use crate::error::Result;
use crate::models::{Dashboard, DashboardListResponse, DashboardResponse};

const DASHBOARDS_PATH: &str = "/v1/dash";

/// Get a board by integer id or by its string `new_id`.
pub async fn get_dashboard(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    id: Value,
    max_retries: usize,
) -> Result<Dashboard> {
    let path = resource_path(DASHBOARDS_PATH, id)?;
    let body = send_raw(client, base_url, keys, Method::GET, &path, None, max_retries).await?;
    let resp: DashboardResponse = serde_json::from_slice(&body)?;
    Ok(resp.dash)
}

/// List board summaries. Graphs are not included in list entries.
pub async fn list_dashboards(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    max_retries: usize,
) -> Result<Vec<Dashboard>> {
    let body = send_raw(
        client,
        base_url,
        keys,
        Method::GET,
        DASHBOARDS_PATH,
        None,
        max_retries,
    )
    .await?;
    let resp: DashboardListResponse = serde_json::from_slice(&body)?;
    Ok(resp.dashes)
}

pub async fn create_dashboard(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    dashboard: &Dashboard,
    max_retries: usize,
) -> Result<Dashboard> {
    let payload = serde_json::to_vec(dashboard)?;
    let body = send_raw(
        client,
        base_url,
        keys,
        Method::POST,
        DASHBOARDS_PATH,
        Some(payload),
        max_retries,
    )
    .await?;
    let resp: DashboardResponse = serde_json::from_slice(&body)?;
    Ok(resp.dash)
}

pub async fn update_dashboard(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    id: Value,
    dashboard: &Dashboard,
    max_retries: usize,
) -> Result<()> {
    let path = resource_path(DASHBOARDS_PATH, id)?;
    let payload = serde_json::to_vec(dashboard)?;
    send_raw(
        client,
        base_url,
        keys,
        Method::PUT,
        &path,
        Some(payload),
        max_retries,
    )
    .await?;
    Ok(())
}

pub async fn delete_dashboard(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    id: Value,
    max_retries: usize,
) -> Result<()> {
    let path = resource_path(DASHBOARDS_PATH, id)?;
    send_raw(client, base_url, keys, Method::DELETE, &path, None, max_retries).await?;
    Ok(())
}
