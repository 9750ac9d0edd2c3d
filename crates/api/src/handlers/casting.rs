//! Handlers for casting CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use castdesk_core::error::CoreError;
use castdesk_core::types::DbId;
use castdesk_db::models::casting::{CreateCasting, UpdateCasting};
use castdesk_db::repositories::CastingRepo;
use castdesk_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the casting listing.
#[derive(Debug, Deserialize)]
pub struct CastingListParams {
    #[serde(default)]
    pub include_archived: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Verify that a casting exists, returning an error if not found.
pub async fn ensure_casting_exists(pool: &sqlx::PgPool, casting_id: DbId) -> AppResult<()> {
    CastingRepo::find_by_id(pool, casting_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Casting",
            id: casting_id,
        }))?;
    Ok(())
}

/// GET /castings
pub async fn list_castings(
    State(state): State<AppState>,
    Query(params): Query<CastingListParams>,
) -> AppResult<impl IntoResponse> {
    let castings = CastingRepo::list(
        &state.pool,
        params.include_archived,
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;
    Ok(Json(DataResponse { data: castings }))
}

/// POST /castings
pub async fn create_casting(
    State(state): State<AppState>,
    Json(input): Json<CreateCasting>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let casting = CastingRepo::create(&state.pool, &input).await?;

    tracing::info!(casting_id = casting.id, "Casting created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: casting })))
}

/// GET /castings/{id}
pub async fn get_casting(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let casting = CastingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Casting",
            id,
        }))?;
    Ok(Json(DataResponse { data: casting }))
}

/// PUT /castings/{id}
pub async fn update_casting(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCasting>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let casting = CastingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Casting",
            id,
        }))?;

    tracing::info!(casting_id = id, "Casting updated");

    Ok(Json(DataResponse { data: casting }))
}

/// DELETE /castings/{id}
///
/// Archives; bookings keep their reference.
pub async fn archive_casting(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let archived = CastingRepo::archive(&state.pool, id).await?;
    if !archived {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Casting",
            id,
        }));
    }

    tracing::info!(casting_id = id, "Casting archived");

    Ok(StatusCode::NO_CONTENT)
}
