//! Monitor endpoint tests.

mod common;

use common::*;
use datadog_client::models::{Monitor, MonitorOptions, ThresholdCount};
use datadog_client::{get_bool, get_int, get_number, get_string};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};

#[tokio::test]
async fn test_get_monitor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/monitor/91879"))
        .and(header("DD-API-KEY", TEST_API_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_bytes(load_fixture_bytes("monitors/get_monitor.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let monitor = client.get_monitor(91879).await.unwrap();

    assert_eq!(get_int(&monitor.id), (91879, true));
    assert_eq!(
        get_string(&monitor.name),
        ("Bytes received on host0".to_string(), true)
    );
    assert_eq!(monitor.tags, vec!["app:webserver", "frontend"]);

    let options = monitor.options.unwrap();
    assert_eq!(get_bool(&options.locked), (false, true));
    assert_eq!(get_int(&options.renotify_interval), (0, false));
    assert_eq!(options.new_host_delay, Some(300));

    let thresholds = options.thresholds.unwrap();
    let (critical_recovery, present) = get_number(&thresholds.critical_recovery);
    assert!(present);
    assert_eq!(critical_recovery.to_string(), "12345678901234567890");
    assert_eq!(get_number(&thresholds.warning).0.to_string(), "80.5");
    assert!(!get_number(&thresholds.ok).1);
}

#[tokio::test]
async fn test_get_monitor_accepts_string_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/monitor/91879"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("monitors/get_monitor.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let monitor = client.get_monitor("91879").await.unwrap();
    assert_eq!(monitor.id, Some(91879));
}

#[tokio::test]
async fn test_list_monitors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/monitor"))
        .respond_with(
            ResponseTemplate::new(200).set_body_bytes(load_fixture_bytes("monitors/list_monitors.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let monitors = client.list_monitors().await.unwrap();

    assert_eq!(monitors.len(), 2);
    let thresholds = monitors[1]
        .options
        .as_ref()
        .and_then(|o| o.thresholds.as_ref())
        .unwrap();
    assert_eq!(thresholds.ok.as_ref().map(ToString::to_string).as_deref(), Some("2"));
    assert_eq!(
        thresholds.critical.as_ref().and_then(|n| n.as_f64()),
        Some(0.8)
    );
}

#[tokio::test]
async fn test_create_monitor_omits_absent_fields() {
    let mock_server = MockServer::start().await;

    let monitor = Monitor {
        name: Some("Disk usage".to_string()),
        monitor_type: Some("metric alert".to_string()),
        query: Some("avg(last_15m):avg:system.disk.in_use{*} > 0.8".to_string()),
        options: Some(MonitorOptions {
            notify_no_data: Some(false),
            thresholds: Some(ThresholdCount {
                critical: Some("0.8".parse().unwrap()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path("/v1/monitor"))
        .and(body_json(json!({
            "name": "Disk usage",
            "type": "metric alert",
            "query": "avg(last_15m):avg:system.disk.in_use{*} > 0.8",
            "tags": [],
            "options": {
                "notify_no_data": false,
                "thresholds": { "critical": 0.8 }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12345,
            "name": "Disk usage",
            "type": "metric alert",
            "query": "avg(last_15m):avg:system.disk.in_use{*} > 0.8",
            "tags": [],
            "options": {
                "notify_no_data": false,
                "thresholds": { "critical": 0.8 }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let created = client.create_monitor(&monitor).await.unwrap();
    assert_eq!(created.id, Some(12345));
    assert_eq!(created.options, monitor.options);
}

#[tokio::test]
async fn test_update_and_delete_monitor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/monitor/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12345,
            "name": "renamed"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/monitor/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deleted_monitor_id": 12345
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let updated = client
        .update_monitor(
            12345,
            &Monitor {
                name: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name.as_deref(), Some("renamed"));

    client.delete_monitor(12345).await.unwrap();
}

#[tokio::test]
async fn test_get_monitor_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/monitor/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": ["Monitor not found"]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.get_monitor(1).await.unwrap_err();

    match &err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "Monitor not found");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("404"));
    assert!(!err.to_string().contains("unsupported id type"));
}
