//! Repository for the `tankers` table.

use sqlx::PgPool;
use waterline_core::types::DbId;

use crate::models::tanker::{CreateTanker, Tanker};

/// Column list for `tankers` queries.
const COLUMNS: &str =
    "id, economic_number, status, current_report_id, created_at, updated_at";

/// Provides CRUD operations for service units.
pub struct TankerRepo;

impl TankerRepo {
    /// Register a new tanker, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateTanker) -> Result<Tanker, sqlx::Error> {
        let query = format!(
            "INSERT INTO tankers (economic_number) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tanker>(&query)
            .bind(&input.economic_number)
            .fetch_one(pool)
            .await
    }

    /// Find a tanker by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tanker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tankers WHERE id = $1");
        sqlx::query_as::<_, Tanker>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tankers ordered by economic number.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tanker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tankers ORDER BY economic_number ASC");
        sqlx::query_as::<_, Tanker>(&query).fetch_all(pool).await
    }

    /// Update a tanker's availability status. Leaving dispatch clears the
    /// report back-reference. Returns `None` if the tanker does not exist.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Tanker>, sqlx::Error> {
        let query = format!(
            "UPDATE tankers SET \
                status = $2, \
                current_report_id = CASE WHEN $2 = 'dispatched' \
                    THEN current_report_id ELSE NULL END, \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tanker>(&query)
            .bind(id)
            .bind(new_status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tanker. Reports referencing it have their assignment
    /// nulled by the `ON DELETE SET NULL` referential policy, never left
    /// dangling. Returns whether a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tankers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
