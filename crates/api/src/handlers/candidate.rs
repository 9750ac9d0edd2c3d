//! Handlers for candidate CRUD (onboarding pipeline).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use castdesk_core::error::CoreError;
use castdesk_core::types::DbId;
use castdesk_db::models::candidate::CreateCandidate;
use castdesk_db::repositories::CandidateRepo;
use castdesk_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /candidates
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let candidates = CandidateRepo::list(
        &state.pool,
        params.q.as_deref(),
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;
    Ok(Json(DataResponse { data: candidates }))
}

/// POST /candidates
///
/// Manual single-candidate entry; the importer uses its own batch path.
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(input): Json<CreateCandidate>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let candidate = CandidateRepo::create(&state.pool, &input).await?;

    tracing::info!(candidate_id = candidate.id, "Candidate created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: candidate })))
}

/// GET /candidates/{id}
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let candidate = CandidateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Candidate",
            id,
        }))?;
    Ok(Json(DataResponse { data: candidate }))
}

/// DELETE /candidates/{id}
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CandidateRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Candidate",
            id,
        }));
    }

    tracing::info!(candidate_id = id, "Candidate deleted");

    Ok(StatusCode::NO_CONTENT)
}
