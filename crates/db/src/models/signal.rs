//! Signal ledger row model.

use heartsignal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Status assigned to every signal at creation. There is no state machine
/// beyond this value in the current service.
pub const SIGNAL_STATUS_SENT: &str = "sent";

/// A row from the `signals` table. Immutable after insert.
///
/// Serializes `created_at` as `timestamp` to match the wire contract
/// consumed by the mobile client.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: DbId,
    pub from_user_id: String,
    pub to_user_id: String,
    pub status: String,
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
}
