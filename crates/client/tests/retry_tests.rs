//! Rate limit (429) retry behavior tests.
//!
//! # Invariants
//! - 429 responses are retried with exponential backoff (1s, 2s, ...)
//! - Other statuses are never retried
//! - An exhausted budget surfaces as `MaxRetriesExceeded(attempts)`

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_retry_on_429_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/logs/config/pipeline-order"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "errors": ["Rate limit exceeded"]
        })))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/logs/config/pipeline-order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("logs/pipeline_order.json")))
        .mount(&mock_server)
        .await;

    let client = test_client_with_retries(&mock_server.uri(), 1);
    let order = client.get_logs_pipeline_order().await.unwrap();
    assert_eq!(order.pipeline_ids.len(), 2);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_retry_on_429_exhaustion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/monitor"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "errors": ["Rate limit exceeded"]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = test_client_with_retries(&mock_server.uri(), 1);
    let err = client.list_monitors().await.unwrap_err();

    assert!(matches!(err, ClientError::MaxRetriesExceeded(2)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/monitor/7"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client_with_retries(&mock_server.uri(), 3);
    let err = client.get_monitor(7).await.unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            // Non-JSON bodies are passed through as the message.
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
