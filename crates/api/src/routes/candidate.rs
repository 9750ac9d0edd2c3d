//! Candidate routes, registered as `/candidates`.
//!
//! ```text
//! GET    /          list_candidates
//! POST   /          create_candidate
//! GET    /{id}      get_candidate
//! DELETE /{id}      delete_candidate
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::candidate;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(candidate::list_candidates).post(candidate::create_candidate),
        )
        .route(
            "/{id}",
            get(candidate::get_candidate).delete(candidate::delete_candidate),
        )
}
