//! Request execution with retry on HTTP 429.
//!
//! Every endpoint funnels through [`send_request_with_retry`], which resends
//! rate-limited requests with exponential backoff and turns non-success
//! responses into [`ClientError::ApiError`].

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiErrors;

/// Used when the caller passes `0`.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Send a request, retrying HTTP 429 up to `max_retries` times.
///
/// Backoff is `2^attempt` seconds (1s, 2s, 4s, ...). When the budget is spent
/// the call fails with `MaxRetriesExceeded(attempts)`. Transport failures are
/// returned immediately.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None if attempt == 0 => {
                debug!("Request builder cannot be cloned, single attempt only");
                return check_status(builder.send().await?).await;
            }
            None => return Err(ClientError::MaxRetriesExceeded(attempt)),
        };

        let response = attempt_builder.send().await?;
        if response.status() != StatusCode::TOO_MANY_REQUESTS {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request completed after retry");
            }
            return check_status(response).await;
        }

        if attempt < max_retries {
            let backoff_secs = 2u64.pow(attempt as u32);
            debug!(
                attempt = attempt + 1,
                max_attempts = max_retries + 1,
                backoff_secs,
                "Rate limited (HTTP 429), retrying"
            );
            tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
        }
    }

    debug!(attempts = max_retries + 1, "Retries exhausted for rate-limited request");
    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Pass success responses through; read the body of anything else into an `ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    debug!(status, url = %url, "Datadog API returned an error");

    let message = serde_json::from_str::<ApiErrors>(&body)
        .ok()
        .and_then(|errors| errors.message())
        .unwrap_or(body);

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
