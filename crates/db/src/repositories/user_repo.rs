//! Repository for the `users` table (the user directory).
//!
//! All writes are merge-upserts keyed by `user_id`: only the supplied
//! columns change, the rest persist. Rows are created implicitly on the
//! first write, so there is no separate "create user" operation.

use sqlx::PgPool;

use crate::models::user::User;

/// Column list for `users` queries.
const COLUMNS: &str = "user_id, latitude, longitude, is_visible, fcm_token, avatar_id, updated_at";

/// Provides upsert and lookup operations for the user directory.
pub struct UserRepo;

impl UserRepo {
    /// Merge-write a user's last-known location.
    ///
    /// Forces `is_visible = TRUE` (reporting a location marks the user
    /// visible) and bumps `updated_at`. The notification token and avatar
    /// are untouched.
    pub async fn upsert_location(
        pool: &PgPool,
        user_id: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO users (user_id, latitude, longitude, is_visible, updated_at) \
             VALUES ($1, $2, $3, TRUE, NOW()) \
             ON CONFLICT (user_id) DO UPDATE \
             SET latitude = EXCLUDED.latitude, \
                 longitude = EXCLUDED.longitude, \
                 is_visible = TRUE, \
                 updated_at = NOW()",
        )
        .bind(user_id)
        .bind(latitude)
        .bind(longitude)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Merge-write a user's push-notification token.
    ///
    /// Coordinates are untouched; the row is created if absent (a user may
    /// register a token before ever reporting a location).
    pub async fn upsert_token(
        pool: &PgPool,
        user_id: &str,
        fcm_token: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO users (user_id, fcm_token, updated_at) \
             VALUES ($1, $2, NOW()) \
             ON CONFLICT (user_id) DO UPDATE \
             SET fcm_token = EXCLUDED.fcm_token, \
                 updated_at = NOW()",
        )
        .bind(user_id)
        .bind(fcm_token)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Full scan of the directory.
    ///
    /// Nearby queries filter this in memory; a known scaling limitation
    /// accepted at the current user count.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users"))
            .fetch_all(pool)
            .await
    }

    /// Look up a single user by ID.
    pub async fn get(pool: &PgPool, user_id: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE user_id = $1"))
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
