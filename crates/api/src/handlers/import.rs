//! Handlers for the spreadsheet onboarding importer.
//!
//! Endpoints cover the whole pipeline: upload (parse + validate), paged
//! preview, per-row and per-page selection toggles, batch commit, the
//! downloadable error report, and session cancellation. Preview state
//! lives in the in-memory [`ImportStore`](crate::imports::ImportStore)
//! until commit or cancellation.
//!
//! Failure semantics: a parse failure creates no session; validation
//! never fails the pipeline, it only annotates rows; a failed commit
//! leaves the session (and its selection) untouched so the user can
//! retry without re-checking anything.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use castdesk_core::import::preview::ImportPreview;
use castdesk_core::import::report::build_error_report;
use castdesk_core::import::{draft_candidate, CandidateDraft};
use castdesk_db::models::candidate::CreateCandidate;
use castdesk_db::models::import_report::{
    CreateImportReport, ImportReport, IMPORT_STATUS_COMMITTED, IMPORT_STATUS_FAILED,
};
use castdesk_db::repositories::{CandidateRepo, ImportReportRepo};
use castdesk_db::{clamp_limit, clamp_offset};
use castdesk_events::{DomainEvent, Severity};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Query parameters for the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub source_name: Option<String>,
}

/// Query parameters for the preview endpoint.
#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    #[serde(default)]
    pub page: usize,
}

/// Summary of a freshly created import session.
#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub session_id: Uuid,
    pub source_name: String,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub error_rows: usize,
    pub selected_rows: usize,
    pub page_count: usize,
}

/// Result of a single-row selection toggle.
#[derive(Debug, Serialize)]
pub struct RowSelection {
    pub index: usize,
    pub selected: bool,
}

/// Result of a committed import.
#[derive(Debug, Serialize)]
pub struct CommitResponse {
    pub inserted: u64,
    pub report: ImportReport,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Import session {id} not found"))
}

/// POST /imports
///
/// Accept a raw xlsx body, parse and validate it, and open a preview
/// session with every row selected. A malformed workbook is fatal to the
/// attempt: no session is created.
pub async fn upload(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let sheet = castdesk_sheet::parse_workbook(&body)?;
    let source_name = params.source_name.unwrap_or_else(|| "upload.xlsx".into());

    let preview = ImportPreview::new(sheet.headers, sheet.rows);
    let summary_base = (
        preview.row_count(),
        preview.valid_count(),
        preview.error_count(),
        preview.page_count(),
    );
    let session_id = state.imports.insert(source_name.clone(), preview).await;

    let (total_rows, valid_rows, error_rows, page_count) = summary_base;
    tracing::info!(
        session_id = %session_id,
        source_name = %source_name,
        total_rows,
        error_rows,
        "Import session opened"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ImportSummary {
                session_id,
                source_name,
                total_rows,
                valid_rows,
                error_rows,
                selected_rows: total_rows,
                page_count,
            },
        }),
    ))
}

/// GET /imports/{id}/preview?page=N
///
/// One 0-based page of the preview table. Every parsed row appears,
/// valid or not; rows with errors carry their per-field annotations.
pub async fn preview_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PreviewParams>,
) -> AppResult<impl IntoResponse> {
    let view = state
        .imports
        .with_session(id, |s| s.preview.page_view(params.page))
        .await
        .ok_or_else(|| session_not_found(id))?
        .map_err(AppError::Core)?;
    Ok(Json(DataResponse { data: view }))
}

/// PUT /imports/{id}/rows/{index}/selection
///
/// Flip one row's selection.
pub async fn toggle_row(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> AppResult<impl IntoResponse> {
    let selected = state
        .imports
        .with_session_mut(id, |s| s.preview.toggle_row(index))
        .await
        .ok_or_else(|| session_not_found(id))?
        .map_err(AppError::Core)?;
    Ok(Json(DataResponse {
        data: RowSelection { index, selected },
    }))
}

/// PUT /imports/{id}/pages/{page}/selection
///
/// Select-all toggle scoped to one page: inspects only the rows visible
/// on that page and never touches the rest of the selection.
pub async fn toggle_page(
    State(state): State<AppState>,
    Path((id, page)): Path<(Uuid, usize)>,
) -> AppResult<impl IntoResponse> {
    let toggle = state
        .imports
        .with_session_mut(id, |s| s.preview.toggle_page(page))
        .await
        .ok_or_else(|| session_not_found(id))?
        .map_err(AppError::Core)?;
    Ok(Json(DataResponse { data: toggle }))
}

struct CommitSnapshot {
    source_name: String,
    total_rows: usize,
    valid_rows: usize,
    error_rows: usize,
    drafts: Vec<CreateCandidate>,
}

fn to_create_candidate(draft: CandidateDraft, source_name: &str) -> CreateCandidate {
    CreateCandidate {
        full_name: if draft.full_name.is_empty() {
            "(unnamed)".into()
        } else {
            draft.full_name
        },
        email: draft.email,
        phone: draft.phone,
        instagram_handle: draft.username,
        instagram_followers: draft.followers,
        instagram_following: draft.following,
        profile_url: draft.profile_url,
        remarks: draft.remarks,
        source: draft.source.or_else(|| Some(source_name.to_string())),
    }
}

/// POST /imports/{id}/commit
///
/// Insert the currently selected rows as candidates in one all-or-nothing
/// batch. On success the session is discarded and a report row recorded;
/// on failure the session survives intact so the commit can be retried.
pub async fn commit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state
        .imports
        .with_session(id, |s| CommitSnapshot {
            source_name: s.source_name.clone(),
            total_rows: s.preview.row_count(),
            valid_rows: s.preview.valid_count(),
            error_rows: s.preview.error_count(),
            drafts: s
                .preview
                .selected_rows()
                .into_iter()
                .map(|(_, row)| to_create_candidate(draft_candidate(row), &s.source_name))
                .collect(),
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    if snapshot.drafts.is_empty() {
        return Err(AppError::BadRequest("No rows are selected".into()));
    }

    match CandidateRepo::insert_batch(&state.pool, &snapshot.drafts).await {
        Ok(inserted) => {
            state.imports.remove(id).await;

            let report = ImportReportRepo::create(
                &state.pool,
                &CreateImportReport {
                    source_name: snapshot.source_name.clone(),
                    total_rows: snapshot.total_rows as i32,
                    valid_rows: snapshot.valid_rows as i32,
                    error_rows: snapshot.error_rows as i32,
                    inserted_rows: inserted as i32,
                    status: IMPORT_STATUS_COMMITTED.to_string(),
                },
            )
            .await?;

            state.event_bus.publish(
                DomainEvent::new(
                    "import.committed",
                    Severity::Success,
                    format!(
                        "Imported {inserted} candidates from {}",
                        snapshot.source_name
                    ),
                )
                .with_source("import_report", report.id)
                .with_payload(serde_json::json!({ "inserted": inserted })),
            );

            tracing::info!(
                session_id = %id,
                inserted,
                "Import committed"
            );

            Ok(Json(DataResponse {
                data: CommitResponse { inserted, report },
            }))
        }
        Err(err) => {
            // Record the failed attempt; the session and its selection
            // stay untouched for a retry.
            let failed = CreateImportReport {
                source_name: snapshot.source_name.clone(),
                total_rows: snapshot.total_rows as i32,
                valid_rows: snapshot.valid_rows as i32,
                error_rows: snapshot.error_rows as i32,
                inserted_rows: 0,
                status: IMPORT_STATUS_FAILED.to_string(),
            };
            if let Err(report_err) = ImportReportRepo::create(&state.pool, &failed).await {
                tracing::warn!(error = %report_err, "Failed to record failed import");
            }

            state.event_bus.publish(DomainEvent::new(
                "import.failed",
                Severity::Error,
                format!("Import of {} failed", snapshot.source_name),
            ));

            tracing::error!(session_id = %id, error = %err, "Import commit failed");

            Err(AppError::Database(err))
        }
    }
}

/// GET /imports/{id}/error-report
///
/// Download a spreadsheet holding only the rows that had validation
/// errors, each annotated with a consolidated `field: message` column.
/// Available independently of commit while the session lives.
pub async fn error_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let bytes = state
        .imports
        .with_session(id, |s| {
            let report = build_error_report(
                s.preview.headers(),
                s.preview.rows(),
                &s.preview.outcome().errors,
            );
            castdesk_sheet::write_error_report(&report)
        })
        .await
        .ok_or_else(|| session_not_found(id))??;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"import-errors.xlsx\"",
            ),
        ],
        bytes,
    ))
}

/// DELETE /imports/{id}
///
/// Discard a session without committing.
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    state
        .imports
        .remove(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    tracing::info!(session_id = %id, "Import session cancelled");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /imports/reports
///
/// History of finished imports, most recent first.
pub async fn list_reports(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let reports = ImportReportRepo::list(
        &state.pool,
        clamp_limit(params.limit),
        clamp_offset(params.offset),
    )
    .await?;
    Ok(Json(DataResponse { data: reports }))
}
