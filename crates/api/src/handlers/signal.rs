//! Handlers for the `/signals` resource: sending signals (with mutual-match
//! detection and push fan-out) and reading received history.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use heartsignal_core::error::CoreError;
use heartsignal_db::models::Signal;
use heartsignal_db::repositories::{SignalRepo, UserRepo};

use crate::error::AppResult;
use crate::notifications::{
    dispatch_all, Dispatch, MSG_MATCH_RECIPIENT, MSG_MATCH_SENDER, MSG_SIGNAL_RECEIVED,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signals/send`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSignalRequest {
    pub from_user_id: Option<String>,
    pub to_user_id: Option<String>,
}

/// Response body for `POST /signals/send`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSignalResponse {
    pub message: &'static str,
    pub is_match: bool,
}

/// Response body for `GET /signals/received/{userId}`.
#[derive(Debug, Serialize)]
pub struct ReceivedSignalsResponse {
    pub signals: Vec<Signal>,
}

fn require_str(value: Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signals/send
///
/// Record a directed signal, then decide whether it completed a mutual
/// match by probing the ledger for the reverse direction. The probe runs
/// after the insert; two concurrent opposite sends can both miss each
/// other, an accepted race (no transaction spans the write and the read).
///
/// Push fan-out: on a match, each party gets their own match message; on a
/// standard signal, only the recipient is notified. Dispatches run
/// concurrently and are awaited, but their outcomes never change the
/// response. If the insert succeeds and a later read fails, the signal
/// stays recorded and the error is reported, so a client retry may create
/// a duplicate row.
pub async fn send_signal(
    State(state): State<AppState>,
    Json(input): Json<SendSignalRequest>,
) -> AppResult<Json<SendSignalResponse>> {
    let from_user_id = require_str(input.from_user_id, "fromUserId")?;
    let to_user_id = require_str(input.to_user_id, "toUserId")?;

    SignalRepo::record(&state.pool, &from_user_id, &to_user_id).await?;

    let is_match = SignalRepo::reverse_exists(&state.pool, &from_user_id, &to_user_id).await?;

    // Both token lookups in parallel.
    let (recipient, sender) = tokio::try_join!(
        UserRepo::get(&state.pool, &to_user_id),
        UserRepo::get(&state.pool, &from_user_id),
    )?;

    let recipient_token = recipient.and_then(|u| u.fcm_token);
    let sender_token = sender.and_then(|u| u.fcm_token);

    let mut batch: Vec<Dispatch> = Vec::new();
    if is_match {
        tracing::info!(from = %from_user_id, to = %to_user_id, "Mutual match detected");
        if let Some(token) = recipient_token {
            batch.push((token, MSG_MATCH_RECIPIENT));
        }
        if let Some(token) = sender_token {
            batch.push((token, MSG_MATCH_SENDER));
        }
    } else if let Some(token) = recipient_token {
        batch.push((token, MSG_SIGNAL_RECEIVED));
    }

    dispatch_all(state.push.as_ref(), batch).await;

    Ok(Json(SendSignalResponse {
        message: "Signal sent",
        is_match,
    }))
}

/// GET /signals/received/{userId}
///
/// All signals addressed to the user, newest first. This read path
/// degrades to an empty list on store failure instead of surfacing an
/// error; the mobile inbox stays rendered even when the backend store is
/// unhealthy. Deliberate tradeoff, not an oversight.
pub async fn get_received(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<ReceivedSignalsResponse> {
    let signals = match SignalRepo::list_received(&state.pool, &user_id).await {
        Ok(signals) => signals,
        Err(err) => {
            tracing::error!(error = %err, %user_id, "Received-signals read failed, degrading to empty");
            Vec::new()
        }
    };

    Json(ReceivedSignalsResponse { signals })
}
