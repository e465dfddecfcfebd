//! Integration Tests for the Proxy Endpoints
//!
//! Tests full request/response cycle for each endpoint, in mock mode and
//! relaying to a fake completion service.

mod common;

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use lesson_coach::{
    api::{create_router, UpstreamRelay, SERVER_PERSONA},
    client::HttpTransport,
    models::ChatCompletionResponse,
    parser::try_parse,
    prompt::{exercises_prompt, lesson_prompt},
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

use common::{FakeUpstream, UNREACHABLE_URL};

// == Helper Functions ==

fn create_mock_app() -> Router {
    create_router(AppState::mock())
}

fn create_relay_app(upstream_url: &str) -> Router {
    let transport = HttpTransport::new(upstream_url, UNREACHABLE_URL, Duration::from_secs(5)).unwrap();
    let relay = UpstreamRelay::new(transport, "sk-server", "deepseek-chat");
    create_router(AppState::new(Some(relay)))
}

fn proxy_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/deepseek")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Mock Mode ==

#[tokio::test]
async fn test_mock_lesson_completion() {
    let app = create_mock_app();
    let prompt = lesson_prompt("Basics", "Variables", &Default::default());
    let body = serde_json::json!({ "prompt": prompt, "options": {} }).to_string();

    let response = app.oneshot(proxy_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    let completion: ChatCompletionResponse = serde_json::from_value(json).unwrap();
    let lesson = try_parse(completion.first_content().unwrap()).unwrap();
    assert!(!lesson.title.is_empty());
    assert!(!lesson.exercises.is_empty());
}

#[tokio::test]
async fn test_mock_exercises_completion() {
    let app = create_mock_app();
    let body = serde_json::json!({ "prompt": exercises_prompt("loops", "beginner", 3) }).to_string();

    let response = app.oneshot(proxy_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    let content = json["choices"][0]["message"]["content"].as_str().unwrap();
    assert_eq!(try_parse(content).unwrap().exercises.len(), 3);
}

#[tokio::test]
async fn test_missing_prompt_returns_400() {
    let app = create_mock_app();

    let response = app
        .oneshot(proxy_request(r#"{"options":{"temperature":0.5}}"#.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Prompt is required");
}

#[tokio::test]
async fn test_whitespace_prompt_returns_400() {
    let app = create_mock_app();

    let response = app
        .oneshot(proxy_request(r#"{"prompt":"   "}"#.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_endpoint_mock_mode() {
    let app = create_mock_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["mode"], "mock");
    assert!(json["timestamp"].as_str().is_some());
}

// == Relay Mode ==

#[tokio::test]
async fn test_relay_returns_upstream_body_verbatim() {
    let upstream = FakeUpstream::answering("relayed answer");
    let app = create_relay_app(&upstream.spawn().await);

    let response = app
        .oneshot(proxy_request(r#"{"prompt":"explain loops"}"#.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], "cmpl-test");
    assert_eq!(json["choices"][0]["message"]["content"], "relayed answer");
    assert_eq!(upstream.calls(), 1);
}

#[tokio::test]
async fn test_relay_uses_server_credential_and_defaults() {
    let upstream = FakeUpstream::answering("ok");
    let app = create_relay_app(&upstream.spawn().await);

    app.oneshot(proxy_request(r#"{"prompt":"explain loops"}"#.to_string()))
        .await
        .unwrap();

    let seen = upstream.seen();
    assert_eq!(seen.len(), 1);
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-server"));
    assert_eq!(body["model"], "deepseek-chat");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], SERVER_PERSONA);
    assert_eq!(body["messages"][1]["content"], "explain loops");
    assert_eq!(body["max_tokens"], 1500);
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn test_relay_forwards_caller_options() {
    let upstream = FakeUpstream::answering("ok");
    let app = create_relay_app(&upstream.spawn().await);

    app.oneshot(proxy_request(
        r#"{"prompt":"more examples","options":{"temperature":0.3,"max_tokens":400}}"#.to_string(),
    ))
    .await
    .unwrap();

    let (_, body) = &upstream.seen()[0];
    assert_eq!(body["max_tokens"], 400);
    assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
}

#[tokio::test]
async fn test_relay_upstream_failure_returns_500() {
    let upstream = FakeUpstream::failing(StatusCode::SERVICE_UNAVAILABLE);
    let app = create_relay_app(&upstream.spawn().await);

    let response = app
        .oneshot(proxy_request(r#"{"prompt":"explain loops"}"#.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "error");
    assert!(json["message"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_health_endpoint_relay_mode() {
    let app = create_relay_app(UNREACHABLE_URL);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["mode"], "relay");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_mock_app();

    let response = app
        .oneshot(Request::builder().uri("/get/anything").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
