#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use portfolio_chat::{AppConfig, ProviderConfig};
use serde_json::{json, Value};

pub const TEST_KEY: &str = "sk-test-0123456789abcdefghijklmnop";

#[derive(Clone, Copy)]
pub enum Behavior {
    Answer(&'static str),
    /// Responds 429 for the first `n` calls, then answers.
    RateLimitedFor(usize),
    AlwaysRateLimited,
    MissingChoices,
    ServerError,
    Slow(Duration),
}

#[derive(Clone)]
pub struct MockProvider {
    pub url: String,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<(Option<String>, Value)>>>,
}

impl MockProvider {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Authorization header and JSON body of the most recent call.
    pub fn last_request(&self) -> Option<(Option<String>, Value)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct MockState {
    behavior: Behavior,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<(Option<String>, Value)>>>,
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    })
}

async fn completions(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let seen = state.hits.fetch_add(1, Ordering::SeqCst);
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    *state.last_request.lock().unwrap() = Some((auth, body));

    match state.behavior {
        Behavior::Answer(content) => Json(completion(content)).into_response(),
        Behavior::RateLimitedFor(n) if seen < n => rate_limited(),
        Behavior::RateLimitedFor(_) => Json(completion("answered after retry")).into_response(),
        Behavior::AlwaysRateLimited => rate_limited(),
        Behavior::MissingChoices => Json(json!({ "id": "chatcmpl-test" })).into_response(),
        Behavior::ServerError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "message": "boom" } })),
        )
            .into_response(),
        Behavior::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Json(completion("too late")).into_response()
        }
    }
}

fn rate_limited() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({ "error": { "message": "Rate limit reached" } })),
    )
        .into_response()
}

pub async fn spawn_mock_provider(behavior: Behavior) -> MockProvider {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_request = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(MockState {
            behavior,
            hits: hits.clone(),
            last_request: last_request.clone(),
        });

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockProvider {
        url: format!("http://{}/v1/chat/completions", addr),
        hits,
        last_request,
    }
}

/// Scaled-down timings: 20 ms backoff unit, no pacing unless asked for.
pub fn test_config(api_url: &str, api_key: &str) -> AppConfig {
    AppConfig {
        port: 0,
        pacing_ms: 0,
        provider: ProviderConfig {
            api_key: api_key.to_string(),
            api_url: api_url.to_string(),
            timeout_ms: 2_000,
            backoff_unit_ms: 20,
            ..ProviderConfig::default()
        },
    }
}
