//! Route definitions, one module per entity group.

pub mod booking;
pub mod candidate;
pub mod casting;
pub mod health;
pub mod import;
pub mod notification;
pub mod talent;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /talents            list, create; /{id} get, update, deactivate
/// /castings           list, create; /{id} get, update, archive
/// /bookings           list, create; /{id} get, update
/// /bookings/{id}/transitions   legal next statuses
/// /bookings/{id}/status        status transition (PUT)
/// /candidates         list, create; /{id} get, delete
/// /imports            upload, reports, preview/selection/commit/report
/// /notifications      list, mark read, mark all read
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/talents", talent::router())
        .nest("/castings", casting::router())
        .nest("/bookings", booking::router())
        .nest("/candidates", candidate::router())
        .nest("/imports", import::router())
        .nest("/notifications", notification::router())
}
