//! Citizen profile model: one-to-one neighborhood/contact metadata.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waterline_core::types::{DbId, Timestamp};

/// A row from the `citizen_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CitizenProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub neighborhood: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating a profile. Only non-`None` fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfile {
    pub neighborhood: Option<String>,
    pub phone: Option<String>,
}
