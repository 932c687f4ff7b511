use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use interview_prep_backend::{
    error::Error,
    services::gemini_client::{GeminiClient, SamplingParams, TextGenerator, API_KEY_HEADER},
};
use serde_json::{json, Value as JsonValue};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Recorded {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

struct RecordedCall {
    path: String,
    query: HashMap<String, String>,
    api_key: String,
    body: JsonValue,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    reply: JsonValue,
    recorded: Recorded,
}

async fn generate_content(
    State(state): State<MockState>,
    Path(path): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<JsonValue>,
) -> impl IntoResponse {
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.recorded.calls.lock().unwrap().push(RecordedCall {
        path,
        query,
        api_key,
        body,
    });
    (state.status, Json(state.reply.clone()))
}

/// Serves `reply` with `status` on an ephemeral port and returns its base URL.
async fn spawn_mock(status: StatusCode, reply: JsonValue) -> (String, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/models/:call", post(generate_content))
        .with_state(MockState {
            status,
            reply,
            recorded: recorded.clone(),
        });
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/", addr), recorded)
}

fn client(base_url: &str) -> GeminiClient {
    GeminiClient::new(
        "test-key".into(),
        "gemini-test".into(),
        reqwest::Client::new(),
    )
    .with_base_url(base_url)
}

#[tokio::test]
async fn sends_prompt_and_sampling_params() {
    let (base, recorded) = spawn_mock(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": "[{\"question\":" }, { "text": "\"Why?\"}]" }] },
                "finishReason": "STOP"
            }]
        }),
    )
    .await;

    let text = client(&base)
        .generate("Generate 1 question", &SamplingParams::with_temperature(0.5))
        .await
        .unwrap();
    assert_eq!(text, "[{\"question\":\"Why?\"}]");

    let calls = recorded.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.path, "gemini-test:generateContent");
    assert_eq!(call.api_key, "test-key");
    assert!(call.query.is_empty(), "key must not travel in the URL");
    let body = &call.body;
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Generate 1 question");
    assert_eq!(body["generationConfig"]["temperature"], 0.5);
    assert_eq!(body["generationConfig"]["topK"], 40);
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 4096);
}

#[tokio::test]
async fn non_success_status_is_an_external_service_error() {
    let (base, _) = spawn_mock(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "quota exceeded" } }),
    )
    .await;

    let err = client(&base)
        .generate("prompt", &SamplingParams::with_temperature(0.7))
        .await
        .unwrap_err();
    match err {
        Error::ExternalService(msg) => {
            assert!(msg.contains("429"), "{msg}");
            assert!(msg.contains("quota exceeded"), "{msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn blocked_prompt_reports_the_block_reason() {
    let (base, _) = spawn_mock(
        StatusCode::OK,
        json!({ "promptFeedback": { "blockReason": "SAFETY" } }),
    )
    .await;

    let err = client(&base)
        .generate("prompt", &SamplingParams::with_temperature(0.7))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ExternalService(ref msg) if msg.contains("SAFETY")));
}
