//! Repository for the `signals` table (the signal ledger).
//!
//! The ledger is append-only: signals are inserted with a server-assigned
//! timestamp and never updated or deleted. Matches are not stored; they
//! are derived by probing for the reverse-direction signal at write time.

use heartsignal_core::types::DbId;
use sqlx::PgPool;

use crate::models::signal::Signal;

/// Column list for `signals` queries.
const COLUMNS: &str = "id, from_user_id, to_user_id, status, created_at";

/// Provides append and read operations for the signal ledger.
pub struct SignalRepo;

impl SignalRepo {
    /// Append a signal, returning the generated ID.
    ///
    /// Duplicates for the same (from, to) pair are allowed; every send is
    /// its own row.
    pub async fn record(
        pool: &PgPool,
        from_user_id: &str,
        to_user_id: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO signals (from_user_id, to_user_id) \
             VALUES ($1, $2) \
             RETURNING id",
        )
        .bind(from_user_id)
        .bind(to_user_id)
        .fetch_one(pool)
        .await
    }

    /// Check whether a reverse-direction signal exists: given a new signal
    /// (from → to), probe for any prior (to → from) row.
    ///
    /// This is the mutual-match test. `SELECT EXISTS` short-circuits on the
    /// first hit; it is an existence probe, not a count. The just-recorded
    /// signal points the other way, so it can never satisfy its own probe.
    pub async fn reverse_exists(
        pool: &PgPool,
        from_user_id: &str,
        to_user_id: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS( \
                SELECT 1 FROM signals \
                WHERE from_user_id = $1 AND to_user_id = $2 \
             )",
        )
        .bind(to_user_id)
        .bind(from_user_id)
        .fetch_one(pool)
        .await
    }

    /// All signals addressed to a user, newest first.
    ///
    /// Ties on `created_at` are broken by `id` so the order stays
    /// deterministic for back-to-back sends.
    pub async fn list_received(pool: &PgPool, user_id: &str) -> Result<Vec<Signal>, sqlx::Error> {
        sqlx::query_as::<_, Signal>(&format!(
            "SELECT {COLUMNS} FROM signals \
             WHERE to_user_id = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
