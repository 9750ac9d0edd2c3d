//! Handlers for talent CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use castdesk_core::error::CoreError;
use castdesk_core::types::DbId;
use castdesk_db::models::talent::{CreateTalent, UpdateTalent};
use castdesk_db::repositories::TalentRepo;
use castdesk_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the talent listing.
#[derive(Debug, Deserialize)]
pub struct TalentListParams {
    pub q: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Verify that a talent exists, returning an error if not found.
pub async fn ensure_talent_exists(pool: &sqlx::PgPool, talent_id: DbId) -> AppResult<()> {
    TalentRepo::find_by_id(pool, talent_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Talent",
            id: talent_id,
        }))?;
    Ok(())
}

/// GET /talents
pub async fn list_talents(
    State(state): State<AppState>,
    Query(params): Query<TalentListParams>,
) -> AppResult<impl IntoResponse> {
    let talents = TalentRepo::list(
        &state.pool,
        params.q.as_deref(),
        params.include_inactive,
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;
    Ok(Json(DataResponse { data: talents }))
}

/// POST /talents
pub async fn create_talent(
    State(state): State<AppState>,
    Json(input): Json<CreateTalent>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let talent = TalentRepo::create(&state.pool, &input).await?;

    tracing::info!(talent_id = talent.id, "Talent created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: talent })))
}

/// GET /talents/{id}
pub async fn get_talent(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let talent = TalentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Talent",
            id,
        }))?;
    Ok(Json(DataResponse { data: talent }))
}

/// PUT /talents/{id}
pub async fn update_talent(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTalent>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let talent = TalentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Talent",
            id,
        }))?;

    tracing::info!(talent_id = id, "Talent updated");

    Ok(Json(DataResponse { data: talent }))
}

/// DELETE /talents/{id}
///
/// Soft-deactivates; the row stays for historical bookings.
pub async fn deactivate_talent(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deactivated = TalentRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Talent",
            id,
        }));
    }

    tracing::info!(talent_id = id, "Talent deactivated");

    Ok(StatusCode::NO_CONTENT)
}
