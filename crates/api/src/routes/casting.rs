//! Casting routes, registered as `/castings`.
//!
//! ```text
//! GET    /          list_castings
//! POST   /          create_casting
//! GET    /{id}      get_casting
//! PUT    /{id}      update_casting
//! DELETE /{id}      archive_casting
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::casting;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(casting::list_castings).post(casting::create_casting))
        .route(
            "/{id}",
            get(casting::get_casting)
                .put(casting::update_casting)
                .delete(casting::archive_casting),
        )
}
