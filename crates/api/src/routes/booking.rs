//! Booking routes, registered as `/bookings`.
//!
//! ```text
//! GET    /                   list_bookings
//! POST   /                   create_booking
//! GET    /{id}               get_booking
//! PUT    /{id}               update_booking (mutable fields, not status)
//! GET    /{id}/transitions   list_transitions
//! PUT    /{id}/status        transition_status
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(booking::list_bookings).post(booking::create_booking))
        .route(
            "/{id}",
            get(booking::get_booking).put(booking::update_booking),
        )
        .route("/{id}/transitions", get(booking::list_transitions))
        .route("/{id}/status", put(booking::transition_status))
}
