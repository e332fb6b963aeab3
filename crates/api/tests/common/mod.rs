//! Shared helpers for HTTP integration tests.
//!
//! Tests exercise the real router (including the full middleware stack)
//! in-process via `tower::ServiceExt::oneshot`, backed by a per-test
//! database from `#[sqlx::test]` and a recording fake push sender.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use heartsignal_api::config::{PushConfig, ServerConfig};
use heartsignal_api::notifications::{PushError, PushSender};
use heartsignal_api::router::build_app_router;
use heartsignal_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and no push server key.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        push: PushConfig {
            endpoint: "http://127.0.0.1:0/unused".to_string(),
            server_key: None,
        },
    }
}

/// Push sender that records every delivery instead of sending it.
#[derive(Default)]
pub struct RecordingPush {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingPush {
    /// Snapshot of all (token, message) pairs delivered so far.
    pub fn deliveries(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushSender for RecordingPush {
    async fn send(&self, token: &str, message: &str) -> Result<(), PushError> {
        self.sent
            .lock()
            .unwrap()
            .push((token.to_string(), message.to_string()));
        Ok(())
    }
}

/// Push sender whose every delivery fails.
pub struct FailingPush;

#[async_trait]
impl PushSender for FailingPush {
    async fn send(&self, _token: &str, _message: &str) -> Result<(), PushError> {
        Err(PushError::NotConfigured)
    }
}

/// Build the application router with the full middleware stack and a
/// recording push fake, mirroring the construction in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let (app, _) = build_test_app_with_push(pool);
    app
}

/// Like [`build_test_app`], but hands back the push fake so tests can
/// assert on dispatched notifications.
pub fn build_test_app_with_push(pool: PgPool) -> (Router, Arc<RecordingPush>) {
    let push = Arc::new(RecordingPush::default());
    let app = build_app_with_sender(pool, Arc::clone(&push) as Arc<dyn PushSender>);
    (app, push)
}

/// Build the router with an arbitrary push sender.
pub fn build_app_with_sender(pool: PgPool, push: Arc<dyn PushSender>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        push,
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}
