use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use api_rest::{app, AppState};
use relay_core::RelayConfig;

/// Router wired to an unreachable vendor, so bot passthroughs exercise the
/// network-error path without touching the real API.
fn test_app() -> Router {
    let cfg = RelayConfig::new(
        // Port 9 (discard) is never serving HTTP locally.
        "http://127.0.0.1:9",
        "test-key",
        "http://localhost:4000",
        "0.0.0.0:4000",
    )
    .expect("test config");
    app(AppState::new(cfg))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .body(Body::empty())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn pre_call_succeeds_for_any_body_shape() {
    let app = test_app();

    for request in [
        post_json("/api/webhooks/pre-call", json!({ "call": { "to": "+1555" } })),
        post_empty("/api/webhooks/pre-call"),
    ] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["domain"], "medical");
        let context = body["patientContext"].as_object().unwrap();
        assert!(!context.is_empty());
        assert_eq!(context["greetingName"], "Patient");
        assert!(body["requestId"].as_str().is_some());
        assert!(body["receivedAt"].as_str().is_some());
    }
}

#[tokio::test]
async fn fetch_record_finds_seeded_ids_in_any_variant() {
    let app = test_app();

    for id in ["MED-123", "med-123", " Med-123  "] {
        let (status, body) = send(
            &app,
            post_json("/api/webhooks/function/fetch-record", json!({ "id": id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["found"], true);
        assert_eq!(body["id"], "MED-123");
        assert_eq!(body["record"]["name"], "John Smith");
        assert_eq!(body["record"]["insuranceProvider"], "Blue Cross Blue Shield");
        assert!(body.get("suggestions").is_none());
    }
}

#[tokio::test]
async fn fetch_record_miss_returns_hint() {
    let app = test_app();

    for request in [
        post_json("/api/webhooks/function/fetch-record", json!({ "id": "MED-999" })),
        post_json("/api/webhooks/function/fetch-record", json!({ "id": "" })),
        post_json("/api/webhooks/function/fetch-record", json!({})),
        post_empty("/api/webhooks/function/fetch-record"),
    ] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["found"], false);
        assert_eq!(body["record"], Value::Null);
        assert_eq!(
            body["availableRecords"],
            json!(["MED-123", "MED-456", "MED-789", "MED-321"])
        );
        assert_eq!(body["suggestions"], "Try MED-123, MED-456, MED-789, or MED-321");
    }
}

#[tokio::test]
async fn post_call_echoes_and_lists_follow_ups() {
    let app = test_app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/webhooks/post-call",
            json!({
                "callId": "call-42",
                "summary": "Lab results discussed",
                "transcript": "Hello ...",
                "duration": 63,
                "status": "completed"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["processed"], true);
    assert_eq!(body["callId"], "call-42");
    assert_eq!(body["summary"], "Lab results discussed");
    assert_eq!(body["transcript"], "Hello ...");
    assert_eq!(
        body["followUpActions"],
        json!([
            "Schedule follow-up appointment if needed",
            "Update patient record with call notes",
            "Send appointment reminder if scheduled",
            "Notify primary care physician of any concerns"
        ])
    );
}

#[tokio::test]
async fn post_call_tolerates_empty_body() {
    let app = test_app();
    let (status, body) = send(&app, post_empty("/api/webhooks/post-call")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transcript"], "No transcript available");
    assert_eq!(body["summary"], "No summary available");
}

#[tokio::test]
async fn logs_count_every_webhook_and_clear_empties() {
    let app = test_app();

    send(&app, post_json("/api/webhooks/pre-call", json!({}))).await;
    send(
        &app,
        post_json("/api/webhooks/function/fetch-record", json!({ "id": "MED-456" })),
    )
    .await;
    send(
        &app,
        post_json("/api/webhooks/post-call", json!({ "callId": "c1" })),
    )
    .await;

    let (status, body) = send(&app, get("/api/logs")).await;
    assert_eq!(status, StatusCode::OK);
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0]["type"], "pre-call");
    assert_eq!(logs[1]["type"], "function");
    assert_eq!(logs[1]["name"], "fetch-record");
    assert_eq!(logs[2]["type"], "post-call");
    assert_eq!(logs[2]["callId"], "c1");

    let (status, body) = send(&app, post_empty("/api/logs/clear")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logs cleared successfully");

    let (_, body) = send(&app, get("/api/logs")).await;
    assert_eq!(body["logs"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn bot_passthrough_maps_network_failure_to_500() {
    let app = test_app();

    let (status, body) = send(&app, get("/api/bots")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().is_some());

    let (status, _) = send(
        &app,
        post_json("/api/bots", json!({ "name": "Test", "prompt": "p" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let delete = Request::builder()
        .uri("/api/bots/bot-1")
        .method("DELETE")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
