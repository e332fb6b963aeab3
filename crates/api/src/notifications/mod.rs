//! Best-effort push-notification dispatch.
//!
//! Delivery is fire-and-forget from the caller's point of view: the
//! send-signal handler waits for every dispatch to settle, but their
//! outcomes never change the HTTP response. Transport failures are logged
//! at warn and swallowed here.

use async_trait::async_trait;
use futures::future::join_all;
use serde_json::json;

use crate::config::PushConfig;

/// Messages pushed to devices. Copy matches the mobile client.
pub const MSG_SIGNAL_RECEIVED: &str = "💗 Someone sent you a Heart Signal!";
pub const MSG_MATCH_RECIPIENT: &str = "It's a Match! 💘 Someone you signaled liked you back!";
pub const MSG_MATCH_SENDER: &str = "It's a Match! 💘 You matched with a user!";

/// Notification title shown on the device.
const PUSH_TITLE: &str = "HeartSignal";

/// Errors from the push transport. Callers log these; they never surface
/// to the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error("push delivery disabled: no server key configured")]
    NotConfigured,

    #[error("push transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("push endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// A sink for push notifications addressed by device token.
///
/// Object-safe so tests can substitute a recording fake for the real
/// FCM client.
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Deliver `message` to the device identified by `token`.
    async fn send(&self, token: &str, message: &str) -> Result<(), PushError>;
}

/// FCM client speaking the legacy HTTP send API.
pub struct FcmClient {
    http: reqwest::Client,
    endpoint: String,
    server_key: Option<String>,
}

impl FcmClient {
    pub fn new(config: &PushConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            server_key: config.server_key.clone(),
        }
    }
}

#[async_trait]
impl PushSender for FcmClient {
    async fn send(&self, token: &str, message: &str) -> Result<(), PushError> {
        let Some(server_key) = &self.server_key else {
            return Err(PushError::NotConfigured);
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("key={server_key}"))
            .json(&json!({
                "to": token,
                "notification": {
                    "title": PUSH_TITLE,
                    "body": message,
                },
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PushError::Status(response.status()));
        }
        Ok(())
    }
}

/// One pending push: a device token and the message for it.
pub type Dispatch = (String, &'static str);

/// Deliver every dispatch concurrently and wait for all to settle.
///
/// Failures are logged and swallowed; this function cannot fail. Callers
/// are expected to have dropped absent or empty tokens already, but empty
/// tokens are skipped here as well rather than sent.
pub async fn dispatch_all(push: &dyn PushSender, batch: Vec<Dispatch>) {
    let sends = batch
        .iter()
        .filter(|(token, _)| !token.is_empty())
        .map(|(token, message)| async move {
            if let Err(err) = push.send(token, message).await {
                tracing::warn!(error = %err, "Push dispatch failed");
            }
        });

    join_all(sends).await;
}
