//! Route definitions for the `/signals` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::signal;
use crate::state::AppState;

/// Routes mounted at `/signals`.
///
/// ```text
/// POST /send               -> send_signal
/// GET  /received/{userId}  -> get_received
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/send", post(signal::send_signal))
        .route("/received/{userId}", get(signal::get_received))
}
