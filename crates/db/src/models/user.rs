//! User directory row model.

use heartsignal_core::geo::GeoPoint;
use heartsignal_core::proximity::Positioned;
use heartsignal_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// Fallback avatar shown when a user never picked one.
pub const DEFAULT_AVATAR_ID: i32 = 1;

/// A row from the `users` table.
///
/// `latitude`/`longitude` are `None` until the user's first location
/// update; `Some(0.0)` is a real coordinate. `is_visible` is informational
/// only and never filters queries.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_visible: bool,
    pub fcm_token: Option<String>,
    pub avatar_id: Option<i32>,
    pub updated_at: Timestamp,
}

impl User {
    /// Avatar to display, defaulting when the user never set one.
    pub fn avatar_or_default(&self) -> i32 {
        self.avatar_id.unwrap_or(DEFAULT_AVATAR_ID)
    }
}

impl Positioned for User {
    /// Last-known position, or `None` if either coordinate was never
    /// reported. A partial position (one coordinate only) cannot occur
    /// through the upsert path, but is treated as absent if it does.
    fn position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint::new(latitude, longitude)),
            _ => None,
        }
    }
}
