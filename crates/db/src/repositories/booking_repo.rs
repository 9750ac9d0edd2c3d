//! Repository for the `bookings` table.
//!
//! The status column has exactly one write path: [`BookingRepo::update_status`],
//! called by the transition endpoint after the allow-list check. Bookings
//! are never deleted.

use sqlx::PgPool;

use castdesk_core::booking::BookingStatus;
use castdesk_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking, UpdateBooking};

const COLUMNS: &str = "id, talent_id, casting_id, status, starts_on, ends_on, talent_fee, \
     final_fee, details, email_template, created_at, updated_at";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking in `pending` status.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings \
                (talent_id, casting_id, starts_on, ends_on, talent_fee, final_fee, \
                 details, email_template) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.talent_id)
            .bind(input.casting_id)
            .bind(input.starts_on)
            .bind(input.ends_on)
            .bind(input.talent_fee)
            .bind(input.final_fee.unwrap_or(0.0))
            .bind(&input.details)
            .bind(&input.email_template)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bookings, most recent first, with optional talent, casting,
    /// and status filters.
    pub async fn list(
        pool: &PgPool,
        talent_id: Option<DbId>,
        casting_id: Option<DbId>,
        status: Option<BookingStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings \
             WHERE ($1::bigint IS NULL OR talent_id = $1) \
               AND ($2::bigint IS NULL OR casting_id = $2) \
               AND ($3::text IS NULL OR status = $3) \
             ORDER BY created_at DESC \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(talent_id)
            .bind(casting_id)
            .bind(status.map(|s| s.as_str()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a booking's mutable fields; `None` leaves a column
    /// unchanged. Status is not touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET \
                starts_on = COALESCE($2, starts_on), \
                ends_on = COALESCE($3, ends_on), \
                talent_fee = COALESCE($4, talent_fee), \
                final_fee = COALESCE($5, final_fee), \
                details = COALESCE($6, details), \
                email_template = COALESCE($7, email_template) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(input.starts_on)
            .bind(input.ends_on)
            .bind(input.talent_fee)
            .bind(input.final_fee)
            .bind(&input.details)
            .bind(&input.email_template)
            .fetch_optional(pool)
            .await
    }

    /// Single-field status update.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
