//! Shared helpers: an in-process stand-in for the completion service.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// Base URL nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub const LESSON_COMPLETION: &str = "Here is your lesson:\n```json\n{\"title\": \"Variables\", \"theory\": \"A variable names a value.\", \"examples\": [{\"title\": \"Assign\", \"code\": \"x = 1\", \"explanation\": \"binds x\"}], \"exercises\": [], \"key_points\": [\"names\"], \"practical_applications\": \"everywhere\"}\n```\nGood luck!";

/// A request the fake service received: authorization header and JSON body.
pub type SeenRequest = (Option<String>, Value);

#[derive(Clone)]
pub struct FakeUpstream {
    status: StatusCode,
    content: String,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl FakeUpstream {
    /// Answers every request with a completion carrying `content`.
    pub fn answering(content: &str) -> Self {
        Self {
            status: StatusCode::OK,
            content: content.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers every request with `status` and a plain-text body.
    pub fn failing(status: StatusCode) -> Self {
        Self {
            status,
            ..Self::answering("")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    /// Serves the fake on an ephemeral port and returns its base URL.
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/chat/completions", post(chat_completions))
            .with_state(self.clone());
        spawn_router(router).await
    }
}

async fn chat_completions(
    State(upstream): State<FakeUpstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    upstream.calls.fetch_add(1, Ordering::SeqCst);
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    upstream.seen.lock().unwrap().push((auth, body));

    if !upstream.status.is_success() {
        return (upstream.status, "upstream unavailable").into_response();
    }

    Json(json!({
        "id": "cmpl-test",
        "model": "deepseek-chat",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": upstream.content},
            "finish_reason": "stop"
        }]
    }))
    .into_response()
}

/// Serves `router` on 127.0.0.1 with an ephemeral port.
pub async fn spawn_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
