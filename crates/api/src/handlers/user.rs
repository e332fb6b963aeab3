//! Handlers for the `/users` resource: location upserts, token upserts,
//! and the nearby query.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use heartsignal_core::error::CoreError;
use heartsignal_core::geo::{format_distance, GeoPoint};
use heartsignal_core::proximity::{nearby, DEFAULT_RADIUS_KM};
use heartsignal_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/location`.
///
/// All fields are optional at the deserialization layer so that a missing
/// field is a 400 validation error, not a deserializer rejection. A
/// coordinate of `0` is valid and must not be confused with "absent".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationRequest {
    pub user_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Request body for `POST /users/fcm-token`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTokenRequest {
    pub user_id: Option<String>,
    pub fcm_token: Option<String>,
}

/// Query parameters for `GET /users/nearby`.
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Confirmation envelope for write endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// One entry in the nearby result set.
///
/// `distance` is pre-formatted for display ("2.3km"); the raw coordinates
/// let the client place the user on screen.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyUser {
    pub user_id: String,
    pub avatar_id: i32,
    pub distance: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Response body for `GET /users/nearby`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyUsersResponse {
    pub nearby_users: Vec<NearbyUser>,
}

/// Reject absent or empty string fields with a named validation error.
fn require_str(value: Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Reject absent numeric fields. `Some(0.0)` passes: zero is a valid
/// coordinate, only a missing field fails.
fn require_coord(value: Option<f64>, field: &str) -> Result<f64, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /users/location
///
/// Merge-write the caller's last-known position, creating the user row on
/// first contact and forcing it visible.
pub async fn update_location(
    State(state): State<AppState>,
    Json(input): Json<UpdateLocationRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = require_str(input.user_id, "userId")?;
    let latitude = require_coord(input.latitude, "latitude")?;
    let longitude = require_coord(input.longitude, "longitude")?;

    UserRepo::upsert_location(&state.pool, &user_id, latitude, longitude).await?;

    Ok(Json(MessageResponse {
        message: "Location updated",
    }))
}

/// POST /users/fcm-token
///
/// Merge-write the caller's push-notification token.
pub async fn update_fcm_token(
    State(state): State<AppState>,
    Json(input): Json<UpdateTokenRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = require_str(input.user_id, "userId")?;
    let fcm_token = require_str(input.fcm_token, "fcmToken")?;

    UserRepo::upsert_token(&state.pool, &user_id, &fcm_token).await?;

    Ok(Json(MessageResponse {
        message: "Token updated",
    }))
}

/// GET /users/nearby?latitude=..&longitude=..
///
/// Scan the directory and return every user within the default radius of
/// the query point, including the caller if they are in range. Users with
/// no reported position are skipped silently.
pub async fn get_nearby(
    State(state): State<AppState>,
    Query(params): Query<NearbyQuery>,
) -> AppResult<Json<NearbyUsersResponse>> {
    let latitude = require_coord(params.latitude, "latitude")?;
    let longitude = require_coord(params.longitude, "longitude")?;
    let origin = GeoPoint::new(latitude, longitude);

    let users = UserRepo::list_all(&state.pool).await?;

    let nearby_users = nearby(origin, DEFAULT_RADIUS_KM, &users)
        .into_iter()
        .map(|(user, distance)| NearbyUser {
            user_id: user.user_id.clone(),
            avatar_id: user.avatar_or_default(),
            distance: format_distance(distance),
            // position() was Some for every hit, so these are present.
            latitude: user.latitude.unwrap_or_default(),
            longitude: user.longitude.unwrap_or_default(),
        })
        .collect();

    Ok(Json(NearbyUsersResponse { nearby_users }))
}
