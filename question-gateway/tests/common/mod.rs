#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use question_gateway::config::{GatewayConfig, GoogleConfig, ModelConfig};
use question_gateway::services::providers::TextProvider;
use question_gateway::startup::{build_router, AppState, Application};
use secrecy::Secret;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the real server with the Gemini provider pointed at `api_base`.
    pub async fn spawn_gemini(api_base: &str, api_key: &str) -> Self {
        let app = Application::build(test_config(api_base, api_key))
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn the real server around a substitute provider.
    pub async fn spawn_with(provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(
            test_config("http://127.0.0.1:1/v1beta", "unused"),
            provider,
        )
        .await
        .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }

    pub async fn ask(&self, body: Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/perguntar", self.address))
            .json(&body)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .expect("Failed to send request")
    }
}

pub fn test_config(api_base: &str, api_key: &str) -> GatewayConfig {
    GatewayConfig {
        common: CoreConfig { port: 0 },
        google: GoogleConfig {
            api_key: Secret::new(api_key.to_string()),
            api_base: api_base.to_string(),
            timeout_secs: 5,
        },
        model: ModelConfig::default(),
    }
}

/// Router wired to `provider`, for in-process `oneshot` requests.
pub fn router_with(provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState::new(provider))
}

/// POST a raw body to `/api/perguntar` and decode the JSON reply.
pub async fn post_raw(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/perguntar")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn post_question(app: Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, body.to_string()).await
}
