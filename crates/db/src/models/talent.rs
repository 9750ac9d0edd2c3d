//! Talent models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use castdesk_core::types::{DbId, Timestamp};

/// A row from the `talents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Talent {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub instagram_handle: Option<String>,
    pub daily_rate: Option<f64>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new talent.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTalent {
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub instagram_handle: Option<String>,
    #[validate(range(min = 0.0))]
    pub daily_rate: Option<f64>,
    pub notes: Option<String>,
}

/// DTO for updating a talent. `None` fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTalent {
    #[validate(length(min = 1, max = 200))]
    pub full_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub instagram_handle: Option<String>,
    #[validate(range(min = 0.0))]
    pub daily_rate: Option<f64>,
    pub notes: Option<String>,
}
