//! Repository for the `castings` table.

use sqlx::PgPool;

use castdesk_core::types::DbId;

use crate::models::casting::{Casting, CreateCasting, UpdateCasting};

const COLUMNS: &str = "id, title, client_name, description, location, starts_on, ends_on, \
     is_archived, created_at, updated_at";

/// Provides CRUD operations for castings.
pub struct CastingRepo;

impl CastingRepo {
    /// Insert a new casting.
    pub async fn create(pool: &PgPool, input: &CreateCasting) -> Result<Casting, sqlx::Error> {
        let query = format!(
            "INSERT INTO castings \
                (title, client_name, description, location, starts_on, ends_on) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Casting>(&query)
            .bind(&input.title)
            .bind(&input.client_name)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.starts_on)
            .bind(input.ends_on)
            .fetch_one(pool)
            .await
    }

    /// Find a casting by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Casting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM castings WHERE id = $1");
        sqlx::query_as::<_, Casting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List castings, most recent first.
    pub async fn list(
        pool: &PgPool,
        include_archived: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Casting>, sqlx::Error> {
        let archive_filter = if include_archived {
            ""
        } else {
            "WHERE is_archived = FALSE"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM castings \
             {archive_filter} \
             ORDER BY created_at DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Casting>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a casting's fields; `None` leaves a column unchanged.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCasting,
    ) -> Result<Option<Casting>, sqlx::Error> {
        let query = format!(
            "UPDATE castings SET \
                title = COALESCE($2, title), \
                client_name = COALESCE($3, client_name), \
                description = COALESCE($4, description), \
                location = COALESCE($5, location), \
                starts_on = COALESCE($6, starts_on), \
                ends_on = COALESCE($7, ends_on) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Casting>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.client_name)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.starts_on)
            .bind(input.ends_on)
            .fetch_optional(pool)
            .await
    }

    /// Archive a casting. Returns true if a row was updated.
    pub async fn archive(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE castings SET is_archived = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
