//! Integration tests for health probes and global response headers.

mod common;

use axum::http::{header, StatusCode};
use common::*;
use domain::models::Role;
use tower::ServiceExt;

#[tokio::test]
async fn test_live_endpoint() {
    let app = create_test_app(InMemoryAuditLogs::failing());

    let response = app
        .router
        .oneshot(get_request("/api/health/live", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_ready_when_store_reachable() {
    let app = create_test_app(InMemoryAuditLogs::default());

    let response = app
        .router
        .oneshot(get_request("/api/health/ready", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_not_ready_when_store_down() {
    let app = create_test_app(InMemoryAuditLogs::failing());

    let response = app
        .router
        .oneshot(get_request("/api/health/ready", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health_reports_database_state() {
    let app = create_test_app(InMemoryAuditLogs::default());
    let response = app
        .router
        .oneshot(get_request("/api/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["connected"], true);

    let app = create_test_app(InMemoryAuditLogs::failing());
    let response = app
        .router
        .oneshot(get_request("/api/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"]["latency_ms"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let app = create_test_app(InMemoryAuditLogs::default());

    let response = app
        .router
        .oneshot(get_request("/admin/nowhere", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let app = create_test_app(InMemoryAuditLogs::default());
    app.sessions
        .insert("tok", principal(1, "Portal Admin", Role::Admin));

    for (uri, token) in [
        ("/api/health/live", None),
        ("/admin/audit-logs", None),
        ("/admin/audit-logs", Some("tok")),
    ] {
        let response = app
            .router
            .clone()
            .oneshot(get_request(uri, token))
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["referrer-policy"], "same-origin");
        assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
    }
}

#[tokio::test]
async fn test_hsts_when_enabled() {
    let config = exchange_portal_api::config::Config::load_for_test(&[
        ("database.url", "postgres://unused@localhost/unused"),
        ("security.hsts_enabled", "true"),
    ])
    .unwrap();
    let app = create_test_app_with_config(config, InMemoryAuditLogs::default());

    let response = app
        .router
        .oneshot(get_request("/api/health/live", None))
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::STRICT_TRANSPORT_SECURITY)
        .is_some());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = create_test_app(InMemoryAuditLogs::default());

    let request = axum::http::Request::builder()
        .uri("/api/health/live")
        .header("x-request-id", "req-123")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-123");
}
