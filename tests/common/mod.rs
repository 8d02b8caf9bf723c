#![allow(dead_code)]

use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use axum_test::TestServer;
use serde_json::{json, Value};

use bootcamp_api::config::settings::AppConfig;
use bootcamp_api::{modules, AppState};

pub fn app(config: AppConfig) -> TestServer {
    let router = Router::new()
        .merge(modules::health::routes::routes())
        .merge(modules::chat::routes::routes())
        .with_state(AppState { config });

    TestServer::new(router).unwrap()
}

pub fn config(base_url: &str, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        api_key: api_key.map(String::from),
        base_url: base_url.to_string(),
    }
}

/// Stub completion provider that echoes the request body back as the
/// generated content, so tests can inspect exactly what was sent upstream.
pub async fn echo_provider() -> TestServer {
    async fn completions(Json(body): Json<Value>) -> Json<Value> {
        let echoed = serde_json::to_string(&body).unwrap();
        Json(json!({
            "choices": [{"message": {"role": "assistant", "content": echoed}}]
        }))
    }

    let router = Router::new().route("/chat/completions", post(completions));

    TestServer::builder().http_transport().build(router).unwrap()
}

/// Stub provider that always fails with an OpenAI-style error envelope.
pub async fn failing_provider(message: &'static str) -> TestServer {
    let router = Router::new().route(
        "/chat/completions",
        post(move || async move {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"error": {"message": message}})),
            )
        }),
    );

    TestServer::builder().http_transport().build(router).unwrap()
}

pub fn base_url(provider: &TestServer) -> String {
    provider
        .server_address()
        .unwrap()
        .to_string()
        .trim_end_matches('/')
        .to_string()
}
