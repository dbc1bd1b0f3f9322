mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::IntoResponse,
};
use http_body_util::BodyExt;
use ouracli::errors::{OuraError, ValidationError};
use ouracli::server::{AppState, router};
use ouracli::types::ErrorRecord;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(api_url: &str, fallback: Option<&str>) -> axum::Router {
    let state = AppState {
        client: common::client(),
        settings: common::settings(api_url, fallback),
    };
    router(Arc::new(state))
}

fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/oura/personal-info")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app("http://unused", None), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["token_mode"], "strict");

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (_, body) = send(app("http://unused", Some("pat")), request).await;
    assert_eq!(body["token_mode"], "fallback");
}

#[tokio::test]
async fn test_index_page() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app("http://unused", None).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/api/oura/personal-info"));
    assert!(html.contains("Personal Access Token"));
}

#[tokio::test]
async fn test_personal_info_success() {
    let upstream = common::spawn_upstream(200, r#"{"id":"u1","email":"a@b.com"}"#).await;

    let (status, body) = send(app(&upstream.url, None), post(r#"{"token":"abc"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": "u1", "email": "a@b.com" }));
    assert_eq!(upstream.authorizations(), vec!["Bearer abc".to_string()]);
}

#[tokio::test]
async fn test_strict_mode_rejects_missing_token_before_request() {
    let upstream = common::spawn_upstream(200, r#"{"id":"u1","email":"a@b.com"}"#).await;

    for body in ["{}", "", r#"{"token":"   "}"#, r#"{"token":5}"#, "not json"] {
        let (status, response) = send(app(&upstream.url, None), post(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert!(response["error"].is_string());
    }

    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_fallback_mode_uses_server_token() {
    let upstream = common::spawn_upstream(200, r#"{"id":"u1","email":"a@b.com"}"#).await;

    let (status, _) = send(app(&upstream.url, Some("server-pat")), post("{}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(upstream.authorizations(), vec!["Bearer server-pat".to_string()]);
}

#[tokio::test]
async fn test_forced_strict_mode_ignores_fallback() {
    let upstream = common::spawn_upstream(200, r#"{"id":"u1","email":"a@b.com"}"#).await;
    let mut settings = common::settings(&upstream.url, Some("server-pat"));
    settings.require_token = true;
    let state = AppState {
        client: common::client(),
        settings,
    };

    let (status, _) = send(router(Arc::new(state)), post("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let upstream = common::spawn_upstream(401, "{}").await;

    let (status, body) = send(app(&upstream.url, None), post(r#"{"token":"bad"}"#)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid Personal Access Token" }));
}

#[tokio::test]
async fn test_upstream_failure_is_bad_request() {
    let upstream = common::spawn_upstream(500, "{}").await;

    let (status, body) = send(app(&upstream.url, None), post(r#"{"token":"abc"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Oura API error: 500" }));
}

#[tokio::test]
async fn test_malformed_upstream_body_is_bad_gateway() {
    let upstream = common::spawn_upstream(200, r#"{"id":"u1"}"#).await;

    let (status, body) = send(app(&upstream.url, None), post(r#"{"token":"abc"}"#)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("$.email"));
}

#[tokio::test]
async fn test_transport_failure_hides_details() {
    let url = common::closed_url().await;

    let (status, body) = send(app(&url, None), post(r#"{"token":"abc"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Failed to fetch personal info from Oura API" })
    );
}

#[tokio::test]
async fn test_error_record_shape() {
    let response = OuraError::from(ValidationError::request("$.token", "expected a string"))
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let record: ErrorRecord = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(record.error, "Invalid request: $.token expected a string");
}
