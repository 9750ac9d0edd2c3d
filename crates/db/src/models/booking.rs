//! Booking models and DTOs.
//!
//! The `status` column holds the lowercase text form of
//! `castdesk_core::booking::BookingStatus`; it is written only by the
//! status-transition endpoint, never by the general update path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use castdesk_core::booking::BookingStatus;
use castdesk_core::types::{DbId, Timestamp};

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub talent_id: DbId,
    pub casting_id: DbId,
    pub status: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub talent_fee: f64,
    pub final_fee: f64,
    pub details: Option<String>,
    pub email_template: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new booking. New bookings always start `pending`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBooking {
    pub talent_id: DbId,
    pub casting_id: DbId,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    #[validate(range(min = 0.0))]
    pub talent_fee: f64,
    #[validate(range(min = 0.0))]
    pub final_fee: Option<f64>,
    pub details: Option<String>,
    pub email_template: Option<String>,
}

/// DTO for updating a booking's mutable fields. `None` leaves a field
/// unchanged; status is deliberately absent.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBooking {
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    #[validate(range(min = 0.0))]
    pub talent_fee: Option<f64>,
    #[validate(range(min = 0.0))]
    pub final_fee: Option<f64>,
    pub details: Option<String>,
    pub email_template: Option<String>,
}

/// Request body for the status-transition endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionRequest {
    pub status: BookingStatus,
}

/// Response for the allowed-transitions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionsResponse {
    pub status: BookingStatus,
    pub allowed: Vec<BookingStatus>,
}
