//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260301000001_create_users.sql`.

/// Municipal staff: triage, assignment, resolution, informational records.
pub const ROLE_STAFF: &str = "staff";
/// Resident: submits and validates reports, edits their own pending reports.
pub const ROLE_CITIZEN: &str = "citizen";
