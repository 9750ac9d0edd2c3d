//! Importer routes, registered as `/imports`.
//!
//! ```text
//! POST   /                              upload (raw xlsx body)
//! GET    /reports                       list_reports
//! GET    /{id}/preview?page=N           preview_page
//! PUT    /{id}/rows/{index}/selection   toggle_row
//! PUT    /{id}/pages/{page}/selection   toggle_page
//! POST   /{id}/commit                   commit
//! GET    /{id}/error-report             error_report
//! DELETE /{id}                          cancel
//! ```
//!
//! `/reports` is registered before the `/{id}` captures so it is not
//! swallowed by the UUID path parameter.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::import;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(import::upload))
        .route("/reports", get(import::list_reports))
        .route("/{id}/preview", get(import::preview_page))
        .route("/{id}/rows/{index}/selection", put(import::toggle_row))
        .route("/{id}/pages/{page}/selection", put(import::toggle_page))
        .route("/{id}/commit", post(import::commit))
        .route("/{id}/error-report", get(import::error_report))
        .route("/{id}", delete(import::cancel))
}
