//! Repository for the `candidates` table.

use sqlx::PgPool;

use castdesk_core::types::DbId;

use crate::models::candidate::{Candidate, CreateCandidate};

const COLUMNS: &str = "id, full_name, email, phone, instagram_handle, instagram_followers, \
     instagram_following, profile_url, remarks, source, created_at, updated_at";

const INSERT: &str = "INSERT INTO candidates \
        (full_name, email, phone, instagram_handle, instagram_followers, \
         instagram_following, profile_url, remarks, source) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 'import'))";

/// Provides CRUD operations for candidates.
pub struct CandidateRepo;

impl CandidateRepo {
    /// Insert a single candidate.
    pub async fn create(pool: &PgPool, input: &CreateCandidate) -> Result<Candidate, sqlx::Error> {
        let query = format!("{INSERT} RETURNING {COLUMNS}");
        sqlx::query_as::<_, Candidate>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.instagram_handle)
            .bind(input.instagram_followers)
            .bind(input.instagram_following)
            .bind(&input.profile_url)
            .bind(&input.remarks)
            .bind(&input.source)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of candidates in one transaction.
    ///
    /// All-or-nothing: any failure rolls the whole batch back. Returns the
    /// number of inserted rows.
    pub async fn insert_batch(
        pool: &PgPool,
        inputs: &[CreateCandidate],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        for input in inputs {
            sqlx::query(INSERT)
                .bind(&input.full_name)
                .bind(&input.email)
                .bind(&input.phone)
                .bind(&input.instagram_handle)
                .bind(input.instagram_followers)
                .bind(input.instagram_following)
                .bind(&input.profile_url)
                .bind(&input.remarks)
                .bind(&input.source)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(inputs.len() as u64)
    }

    /// Find a candidate by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Candidate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM candidates WHERE id = $1");
        sqlx::query_as::<_, Candidate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List candidates, most recent first, optionally matching a
    /// name/email search term.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Candidate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM candidates \
             WHERE ($1::text IS NULL OR full_name ILIKE $1 OR email ILIKE $1) \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(search.map(|s| format!("%{s}%")))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a candidate by ID. Returns true if deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
