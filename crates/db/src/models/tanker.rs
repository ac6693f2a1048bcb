//! Service unit (tanker truck) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waterline_core::types::{DbId, Timestamp};

/// Tanker availability states.
pub const TANKER_AVAILABLE: &str = "available";
pub const TANKER_DISPATCHED: &str = "dispatched";
pub const TANKER_IN_MAINTENANCE: &str = "in_maintenance";

pub const VALID_TANKER_STATUSES: &[&str] =
    &[TANKER_AVAILABLE, TANKER_DISPATCHED, TANKER_IN_MAINTENANCE];

/// A row from the `tankers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tanker {
    pub id: DbId,
    pub economic_number: String,
    pub status: String,
    /// Back-reference to the report this unit is currently dispatched to.
    pub current_report_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new tanker.
#[derive(Debug, Deserialize)]
pub struct CreateTanker {
    pub economic_number: String,
}

/// DTO for updating a tanker's availability status.
#[derive(Debug, Deserialize)]
pub struct UpdateTankerStatus {
    pub status: String,
}
