use std::sync::Arc;

use crate::config::ServerConfig;
use crate::imports::ImportStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: castdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Centralized event bus for publishing domain events.
    pub event_bus: Arc<castdesk_events::EventBus>,
    /// In-memory import preview sessions.
    pub imports: Arc<ImportStore>,
}
