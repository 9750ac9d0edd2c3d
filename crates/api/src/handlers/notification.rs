//! Handlers for the notification feed.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use castdesk_core::types::DbId;
use castdesk_db::repositories::NotificationRepo;
use castdesk_db::{clamp_limit, clamp_offset};
use castdesk_events::notifier::ADMIN_USER_ID;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the notification listing.
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response for the mark-all endpoint.
#[derive(Debug, Serialize)]
pub struct MarkAllResponse {
    pub marked: u64,
}

/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<NotificationListParams>,
) -> AppResult<impl IntoResponse> {
    let notifications = NotificationRepo::list_for_user(
        &state.pool,
        ADMIN_USER_ID,
        params.unread_only,
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// PUT /notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let marked = NotificationRepo::mark_read(&state.pool, id, ADMIN_USER_ID).await?;
    if !marked {
        return Err(AppError::NotFound(format!(
            "Unread notification {id} not found"
        )));
    }
    Ok(Json(DataResponse { data: () }))
}

/// PUT /notifications/read-all
pub async fn mark_all_read(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let marked = NotificationRepo::mark_all_read(&state.pool, ADMIN_USER_ID).await?;
    Ok(Json(DataResponse {
        data: MarkAllResponse { marked },
    }))
}
