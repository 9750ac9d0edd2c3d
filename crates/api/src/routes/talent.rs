//! Talent routes, registered as `/talents`.
//!
//! ```text
//! GET    /          list_talents
//! POST   /          create_talent
//! GET    /{id}      get_talent
//! PUT    /{id}      update_talent
//! DELETE /{id}      deactivate_talent
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::talent;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(talent::list_talents).post(talent::create_talent))
        .route(
            "/{id}",
            get(talent::get_talent)
                .put(talent::update_talent)
                .delete(talent::deactivate_talent),
        )
}
