//! Repository for the `import_reports` table.

use sqlx::PgPool;

use crate::models::import_report::{CreateImportReport, ImportReport};

const COLUMNS: &str =
    "id, source_name, total_rows, valid_rows, error_rows, inserted_rows, status, created_at";

/// Provides operations for import reports.
pub struct ImportReportRepo;

impl ImportReportRepo {
    /// Record a finished import.
    pub async fn create(
        pool: &PgPool,
        input: &CreateImportReport,
    ) -> Result<ImportReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO import_reports \
                (source_name, total_rows, valid_rows, error_rows, inserted_rows, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ImportReport>(&query)
            .bind(&input.source_name)
            .bind(input.total_rows)
            .bind(input.valid_rows)
            .bind(input.error_rows)
            .bind(input.inserted_rows)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List reports, most recent first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ImportReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM import_reports \
             ORDER BY created_at DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ImportReport>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
