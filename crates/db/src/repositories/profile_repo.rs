//! Repository for the `citizen_profiles` table.

use sqlx::PgPool;
use waterline_core::types::DbId;

use crate::models::profile::{CitizenProfile, UpdateProfile};

/// Column list for `citizen_profiles` queries.
const COLUMNS: &str = "id, user_id, neighborhood, phone, created_at, updated_at";

/// Provides CRUD operations for citizen profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Create an empty profile for a user. Called best-effort during
    /// registration; the caller logs failure instead of propagating it.
    pub async fn create_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<CitizenProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO citizen_profiles (user_id) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CitizenProfile>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find the profile of a user.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<CitizenProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM citizen_profiles WHERE user_id = $1");
        sqlx::query_as::<_, CitizenProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update to a user's profile. Returns `None` if the
    /// user has no profile row.
    pub async fn update_for_user(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<CitizenProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE citizen_profiles SET \
                neighborhood = COALESCE($2, neighborhood), \
                phone = COALESCE($3, phone), \
                updated_at = now() \
             WHERE user_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CitizenProfile>(&query)
            .bind(user_id)
            .bind(&input.neighborhood)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }
}
