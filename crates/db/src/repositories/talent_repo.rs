//! Repository for the `talents` table.

use sqlx::PgPool;

use castdesk_core::types::DbId;

use crate::models::talent::{CreateTalent, Talent, UpdateTalent};

const COLUMNS: &str = "id, full_name, email, phone, city, instagram_handle, daily_rate, \
     is_active, notes, created_at, updated_at";

/// Provides CRUD operations for talents.
pub struct TalentRepo;

impl TalentRepo {
    /// Insert a new talent.
    pub async fn create(pool: &PgPool, input: &CreateTalent) -> Result<Talent, sqlx::Error> {
        let query = format!(
            "INSERT INTO talents \
                (full_name, email, phone, city, instagram_handle, daily_rate, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Talent>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.city)
            .bind(&input.instagram_handle)
            .bind(input.daily_rate)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a talent by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Talent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talents WHERE id = $1");
        sqlx::query_as::<_, Talent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List talents ordered by name, optionally matching a name/email
    /// search term and optionally including deactivated rows.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        include_inactive: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Talent>, sqlx::Error> {
        let active_filter = if include_inactive {
            ""
        } else {
            "AND is_active = TRUE"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM talents \
             WHERE ($1::text IS NULL OR full_name ILIKE $1 OR email ILIKE $1) \
             {active_filter} \
             ORDER BY full_name ASC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Talent>(&query)
            .bind(search.map(|s| format!("%{s}%")))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a talent's fields; `None` leaves a column unchanged.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTalent,
    ) -> Result<Option<Talent>, sqlx::Error> {
        let query = format!(
            "UPDATE talents SET \
                full_name = COALESCE($2, full_name), \
                email = COALESCE($3, email), \
                phone = COALESCE($4, phone), \
                city = COALESCE($5, city), \
                instagram_handle = COALESCE($6, instagram_handle), \
                daily_rate = COALESCE($7, daily_rate), \
                notes = COALESCE($8, notes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Talent>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.city)
            .bind(&input.instagram_handle)
            .bind(input.daily_rate)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a talent. Returns true if a row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE talents SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
