//! Notification feed models.

use serde::Serialize;
use sqlx::FromRow;

use castdesk_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub event_type: String,
    pub severity: String,
    pub message: String,
    pub payload: serde_json::Value,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
