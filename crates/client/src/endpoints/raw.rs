//! Untyped request primitive shared by every resource endpoint.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use tracing::debug;

use crate::auth::ApiKeys;
use crate::endpoints::send_request_with_retry;
use crate::error::Result;

/// Send `method` to `base_url` + `path` with the key headers and an optional
/// JSON body, returning the raw response bytes.
pub async fn send_raw(
    client: &Client,
    base_url: &str,
    keys: &ApiKeys,
    method: Method,
    path: &str,
    body: Option<Vec<u8>>,
    max_retries: usize,
) -> Result<Vec<u8>> {
    let url = format!("{}{}", base_url, path);
    debug!(method = %method, path, "Sending Datadog API request");

    let mut builder = keys
        .apply(client.request(method, &url))
        .header(ACCEPT, "application/json");
    if let Some(body) = body {
        builder = builder.header(CONTENT_TYPE, "application/json").body(body);
    }

    let response = send_request_with_retry(builder, max_retries).await?;
    Ok(response.bytes().await?.to_vec())
}
