//! Field-level edit permissions for report updates.
//!
//! A single declarative table of `field -> minimum role` replaces per-role
//! serializer variants: the API collects the names of the fields a PATCH
//! actually touches and checks them here in one place.

use crate::error::CoreError;
use crate::report::STATUS_PENDING;
use crate::roles::ROLE_STAFF;

/// Fields a citizen may edit on their own report while it is still pending.
pub const CITIZEN_EDITABLE_FIELDS: &[&str] =
    &["problem_type", "description", "address", "photo_url"];

/// Fields reserved for staff: lifecycle, triage, and override fields.
pub const STAFF_ONLY_FIELDS: &[&str] = &[
    "status",
    "staff_note",
    "resolution_photo_url",
    "assigned_tanker_id",
    "priority",
];

/// Check that `role` may touch every field named in `touched`.
///
/// Staff may touch anything. Citizens may touch only
/// [`CITIZEN_EDITABLE_FIELDS`], and only while the report is `pending`;
/// ownership (the citizen editing their own report) is the caller's check.
pub fn check_patch(touched: &[&str], role: &str, report_status: &str) -> Result<(), CoreError> {
    if role == ROLE_STAFF {
        return Ok(());
    }

    for field in touched {
        if !CITIZEN_EDITABLE_FIELDS.contains(field) {
            return Err(CoreError::Forbidden(format!(
                "Field '{field}' can only be modified by staff"
            )));
        }
    }

    if report_status != STATUS_PENDING {
        return Err(CoreError::Forbidden(
            "Reports can only be edited while still pending".into(),
        ));
    }

    Ok(())
}
