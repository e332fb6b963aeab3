pub mod health;
pub mod signals;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                          liveness + db health
///
/// /users/location                  upsert last-known position (POST)
/// /users/nearby                    radius query (GET)
/// /users/fcm-token                 upsert push token (POST)
///
/// /signals/send                    record signal + match detection (POST)
/// /signals/received/{userId}       received history, newest first (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/users", users::router())
        .nest("/signals", signals::router())
}
