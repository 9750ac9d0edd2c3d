//! Import report models.
//!
//! One row is written per import commit attempt, successful or not, so
//! the history view can show what each upload produced.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use castdesk_core::types::{DbId, Timestamp};

/// Status of a finished import.
pub const IMPORT_STATUS_COMMITTED: &str = "committed";
pub const IMPORT_STATUS_FAILED: &str = "failed";

/// A row from the `import_reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImportReport {
    pub id: DbId,
    pub source_name: String,
    pub total_rows: i32,
    pub valid_rows: i32,
    pub error_rows: i32,
    pub inserted_rows: i32,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for recording a finished import.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImportReport {
    pub source_name: String,
    pub total_rows: i32,
    pub valid_rows: i32,
    pub error_rows: i32,
    pub inserted_rows: i32,
    pub status: String,
}
