use std::sync::Arc;

use crate::config::ServerConfig;
use crate::notifications::PushSender;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: heartsignal_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Push-notification sender (FCM in production, a fake in tests).
    pub push: Arc<dyn PushSender>,
}
