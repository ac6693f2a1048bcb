//! Validation ledger model: one immutable row per (report, voter) pair.

use serde::Serialize;
use sqlx::FromRow;
use waterline_core::types::{DbId, Timestamp};

/// A row from the `report_validations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportValidation {
    pub id: DbId,
    pub report_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// Counters and status of a report after an accepted validation, returned
/// to the voter.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ValidationOutcome {
    pub validation_count: i32,
    pub priority: i32,
    pub status: String,
}
