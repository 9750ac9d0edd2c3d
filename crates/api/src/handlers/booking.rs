//! Handlers for bookings and the status lifecycle.
//!
//! The status column moves exclusively through [`transition_status`],
//! which re-validates the requested target against the core transition
//! table before issuing any write. The client is expected to only offer
//! legal targets (it reads them from [`list_transitions`]), so the check
//! here is defense in depth.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use castdesk_core::booking::{ensure_transition, BookingStatus};
use castdesk_core::error::CoreError;
use castdesk_core::types::DbId;
use castdesk_db::models::booking::{
    Booking, CreateBooking, TransitionRequest, TransitionsResponse, UpdateBooking,
};
use castdesk_db::repositories::BookingRepo;
use castdesk_db::{clamp_limit, clamp_offset};
use castdesk_events::{DomainEvent, Severity};

use crate::error::{AppError, AppResult};
use crate::handlers::casting::ensure_casting_exists;
use crate::handlers::talent::ensure_talent_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the booking listing.
#[derive(Debug, Deserialize)]
pub struct BookingListParams {
    pub talent_id: Option<DbId>,
    pub casting_id: Option<DbId>,
    pub status: Option<BookingStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Parse a stored status string, which the schema CHECK keeps valid.
fn stored_status(booking: &Booking) -> AppResult<BookingStatus> {
    booking.status.parse::<BookingStatus>().map_err(|_| {
        AppError::InternalError(format!(
            "Booking {} has unrecognized status '{}'",
            booking.id, booking.status
        ))
    })
}

async fn fetch_booking(pool: &sqlx::PgPool, id: DbId) -> AppResult<Booking> {
    BookingRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))
}

/// GET /bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> AppResult<impl IntoResponse> {
    let bookings = BookingRepo::list(
        &state.pool,
        params.talent_id,
        params.casting_id,
        params.status,
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// POST /bookings
///
/// New bookings always start in `pending`.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    ensure_talent_exists(&state.pool, input.talent_id).await?;
    ensure_casting_exists(&state.pool, input.casting_id).await?;

    if input.ends_on < input.starts_on {
        return Err(AppError::Core(CoreError::Validation(
            "Booking end date precedes start date".into(),
        )));
    }

    let booking = BookingRepo::create(&state.pool, &input).await?;

    state.event_bus.publish(
        DomainEvent::new(
            "booking.created",
            Severity::Info,
            format!("Booking #{} created", booking.id),
        )
        .with_source("booking", booking.id),
    );

    tracing::info!(
        booking_id = booking.id,
        talent_id = booking.talent_id,
        casting_id = booking.casting_id,
        "Booking created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: booking })))
}

/// GET /bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = fetch_booking(&state.pool, id).await?;
    Ok(Json(DataResponse { data: booking }))
}

/// PUT /bookings/{id}
///
/// Updates mutable fields only; status never moves through this path.
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let booking = BookingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    tracing::info!(booking_id = id, "Booking updated");

    Ok(Json(DataResponse { data: booking }))
}

/// GET /bookings/{id}/transitions
///
/// The legal next statuses for this booking. Empty for terminal
/// statuses, which the client renders as "no transition control".
pub async fn list_transitions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = fetch_booking(&state.pool, id).await?;
    let status = stored_status(&booking)?;
    Ok(Json(DataResponse {
        data: TransitionsResponse {
            status,
            allowed: status.allowed_transitions().to_vec(),
        },
    }))
}

/// PUT /bookings/{id}/status
///
/// Move a booking to a new status. The target is checked against the
/// transition table before any write; an illegal target gets a 409 and
/// the store is never touched.
pub async fn transition_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TransitionRequest>,
) -> AppResult<impl IntoResponse> {
    let booking = fetch_booking(&state.pool, id).await?;
    let current = stored_status(&booking)?;

    ensure_transition(current, input.status).map_err(AppError::Core)?;

    let booking = BookingRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    state.event_bus.publish(
        DomainEvent::new(
            "booking.status_changed",
            Severity::Success,
            format!("Booking #{id} moved to {}", input.status),
        )
        .with_source("booking", id)
        .with_payload(serde_json::json!({
            "from": current,
            "to": input.status,
        })),
    );

    tracing::info!(
        booking_id = id,
        from = current.as_str(),
        to = input.status.as_str(),
        "Booking status changed"
    );

    Ok(Json(DataResponse { data: booking }))
}
