//! Casting models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use castdesk_core::types::{DbId, Timestamp};

/// A row from the `castings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Casting {
    pub id: DbId,
    pub title: String,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new casting.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCasting {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
}

/// DTO for updating a casting. `None` fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCasting {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
}
