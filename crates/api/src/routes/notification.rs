//! Notification routes, registered as `/notifications`.
//!
//! ```text
//! GET    /              list_notifications
//! PUT    /read-all      mark_all_read
//! PUT    /{id}/read     mark_read
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list_notifications))
        .route("/read-all", put(notification::mark_all_read))
        .route("/{id}/read", put(notification::mark_read))
}
