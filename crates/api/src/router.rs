//! Application router assembly.
//!
//! Kept separate from `main` so integration tests can build the exact
//! route tree against a test [`AppState`] without binding a socket.

use axum::Router;

use crate::routes;
use crate::state::AppState;

/// Build the full application router: health at the root, the API under
/// `/api/v1`. Middleware layers are applied by the binary on top.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .with_state(state)
}
