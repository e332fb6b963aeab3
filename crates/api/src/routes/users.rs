//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /location   -> update_location
/// GET  /nearby     -> get_nearby
/// POST /fcm-token  -> update_fcm_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/location", post(user::update_location))
        .route("/nearby", get(user::get_nearby))
        .route("/fcm-token", post(user::update_fcm_token))
}
