//! Report entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waterline_core::types::{DbId, Timestamp};

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    /// Human-facing ticket code, assigned exactly once at creation.
    pub folio: String,
    pub longitude: f64,
    pub latitude: f64,
    pub address: Option<String>,
    pub problem_type: String,
    pub description: String,
    pub photo_url: Option<String>,
    pub resolution_photo_url: Option<String>,
    pub staff_note: Option<String>,
    /// Submitting user; NULL for anonymous submissions.
    pub created_by: Option<DbId>,
    pub validation_count: i32,
    pub priority: i32,
    pub status: String,
    pub assigned_tanker_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new report.
///
/// Callers normally supply coordinates directly; with only an address the
/// geocoding collaborator is consulted before this DTO reaches the
/// repository, so `longitude`/`latitude` are resolved by then.
#[derive(Debug, Deserialize)]
pub struct CreateReport {
    pub problem_type: String,
    pub description: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub address: Option<String>,
    pub photo_url: Option<String>,
}

/// Partial update for a report. Only non-`None` fields are applied;
/// which fields a caller may set depends on their role.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateReport {
    pub problem_type: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub photo_url: Option<String>,
    pub status: Option<String>,
    pub staff_note: Option<String>,
    pub resolution_photo_url: Option<String>,
    pub assigned_tanker_id: Option<DbId>,
    pub priority: Option<i32>,
}

impl UpdateReport {
    /// Names of the fields this patch actually touches, for the
    /// field-level permission check.
    pub fn touched_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.problem_type.is_some() {
            fields.push("problem_type");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.address.is_some() {
            fields.push("address");
        }
        if self.photo_url.is_some() {
            fields.push("photo_url");
        }
        if self.status.is_some() {
            fields.push("status");
        }
        if self.staff_note.is_some() {
            fields.push("staff_note");
        }
        if self.resolution_photo_url.is_some() {
            fields.push("resolution_photo_url");
        }
        if self.assigned_tanker_id.is_some() {
            fields.push("assigned_tanker_id");
        }
        if self.priority.is_some() {
            fields.push("priority");
        }
        fields
    }
}

/// Query parameters for listing reports.
#[derive(Debug, Deserialize)]
pub struct ReportListParams {
    pub status: Option<String>,
    pub problem_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
