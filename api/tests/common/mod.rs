#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_test::TestServer;
use clap::Parser;
use dietai_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub const KNOWLEDGE: &str = "Spinach is rich in iron and vitamin K. \
    Lentils provide plant protein and fiber. \
    Bananas are a good source of potassium.";

/// Requests received by the fake Gemini endpoint, in arrival order.
#[derive(Clone, Default)]
pub struct FakeGemini {
    pub requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeGemini {
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    /// Text of the last user turn sent to the model.
    pub fn last_user_text(&self) -> String {
        let requests = self.requests();
        let last = requests.last().expect("no request reached the model");
        last["contents"]
            .as_array()
            .and_then(|contents| contents.last())
            .and_then(|content| content["parts"][0]["text"].as_str())
            .unwrap_or_default()
            .to_string()
    }
}

fn text_reply(text: String) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

/// Echoes the user text back, asks for `calculate_bmi` when the user mentions
/// BMI, and fails when the user says "unavailable".
async fn generate_content(
    State(fake): State<FakeGemini>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    fake.requests.lock().unwrap().push(body.clone());

    let last_part = body["contents"]
        .as_array()
        .and_then(|contents| contents.last())
        .map(|content| content["parts"][0].clone())
        .unwrap_or(Value::Null);

    if let Some(response) = last_part.get("functionResponse") {
        let result = response["response"]["result"]
            .as_str()
            .unwrap_or("no result")
            .to_string();
        return (StatusCode::OK, Json(text_reply(format!("Tool said: {}", result))));
    }

    let text = last_part["text"].as_str().unwrap_or_default().to_string();
    if text.contains("unavailable") {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": { "message": "overloaded" } })),
        );
    }
    if text.to_lowercase().contains("bmi") {
        return (
            StatusCode::OK,
            Json(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{
                        "functionCall": {
                            "name": "calculate_bmi",
                            "args": { "height_m": 1.75, "weight_kg": 70.0 }
                        }
                    }] }
                }]
            })),
        );
    }

    (StatusCode::OK, Json(text_reply(format!("echo: {}", text))))
}

async fn spawn_fake_gemini() -> (FakeGemini, String) {
    let fake = FakeGemini::default();
    let app = Router::new()
        .route("/models/{model_action}", post(generate_content))
        .with_state(fake.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    (fake, format!("http://{}", addr))
}

pub struct DietAiContext {
    pub server: TestServer,
    pub gemini: FakeGemini,
    pub pantry_file: PathBuf,
    _dir: TempDir,
}

impl AsyncTestContext for DietAiContext {
    async fn setup() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let pantry_file = dir.path().join("pantry.json");
        let knowledge_file = dir.path().join("nutrition_facts.txt");
        std::fs::write(&knowledge_file, KNOWLEDGE).unwrap();

        let (gemini, base_url) = spawn_fake_gemini().await;

        let args = Args::parse_from([
            "dietai",
            "--gemini-api-key",
            "test-key",
            "--gemini-model",
            "gemini-test",
            "--gemini-base-url",
            base_url.as_str(),
            "--pantry-file",
            pantry_file.to_str().unwrap(),
            "--knowledge-base-path",
            knowledge_file.to_str().unwrap(),
            "--affiliate-tag",
            "test-21",
        ]);

        let app_state = state(Arc::new(args)).await.unwrap();
        let server = TestServer::new(router(app_state).unwrap()).unwrap();

        Self {
            server,
            gemini,
            pantry_file,
            _dir: dir,
        }
    }
}
