//! Candidate models and DTOs (onboarding pipeline).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use castdesk_core::types::{DbId, Timestamp};

/// A row from the `candidates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Candidate {
    pub id: DbId,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub instagram_handle: Option<String>,
    pub instagram_followers: Option<i32>,
    pub instagram_following: Option<i32>,
    pub profile_url: Option<String>,
    pub remarks: Option<String>,
    pub source: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a candidate, singly or as part of an import batch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCandidate {
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub instagram_handle: Option<String>,
    #[validate(range(min = 0))]
    pub instagram_followers: Option<i32>,
    #[validate(range(min = 0))]
    pub instagram_following: Option<i32>,
    #[validate(url)]
    pub profile_url: Option<String>,
    pub remarks: Option<String>,
    pub source: Option<String>,
}
