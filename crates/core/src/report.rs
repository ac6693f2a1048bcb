//! Report status constants, the lifecycle state machine, and the
//! priority & escalation engine.
//!
//! A report moves `pending -> assigned -> in_progress -> resolved`, with a
//! side branch to `cancelled` from the first two states. Forward moves are
//! staff-driven with one exception: reaching the validation threshold while
//! still `pending` escalates the report to `assigned` automatically, in the
//! same operation that records the vote.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for a newly submitted report.
pub const STATUS_PENDING: &str = "pending";
/// Acknowledged by staff (or auto-escalated) and queued for a crew.
pub const STATUS_ASSIGNED: &str = "assigned";
/// A crew is working the report.
pub const STATUS_IN_PROGRESS: &str = "in_progress";
/// The underlying problem has been fixed. Terminal.
pub const STATUS_RESOLVED: &str = "resolved";
/// Not actionable (duplicate, hoax, out of jurisdiction). Terminal.
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid report statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_ASSIGNED,
    STATUS_IN_PROGRESS,
    STATUS_RESOLVED,
    STATUS_CANCELLED,
];

// ---------------------------------------------------------------------------
// Problem types
// ---------------------------------------------------------------------------

pub const PROBLEM_LEAK: &str = "leak";
pub const PROBLEM_SHORTAGE: &str = "shortage";
pub const PROBLEM_QUALITY: &str = "quality";
pub const PROBLEM_DRAINAGE: &str = "drainage";
pub const PROBLEM_REQUEST: &str = "request";

/// The recognized problem-type vocabulary. Deliberately a slice, not an
/// enum: the category set is expected to grow across versions.
pub const VALID_PROBLEM_TYPES: &[&str] = &[
    PROBLEM_LEAK,
    PROBLEM_SHORTAGE,
    PROBLEM_QUALITY,
    PROBLEM_DRAINAGE,
    PROBLEM_REQUEST,
];

// ---------------------------------------------------------------------------
// Validation / escalation constants
// ---------------------------------------------------------------------------

/// Maximum length for the citizen-provided description field (characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Priority points added per accepted validation vote.
pub const PRIORITY_STEP: i32 = 10;

/// Validation count at which a `pending` report auto-escalates.
pub const ESCALATION_THRESHOLD: i32 = 5;

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Returns the set of statuses that `from_status` may transition to.
///
/// Transition rules:
/// - `pending`     -> `assigned`, `cancelled`
/// - `assigned`    -> `in_progress`, `cancelled`
/// - `in_progress` -> `resolved`
/// - `resolved`    -> (terminal)
/// - `cancelled`   -> (terminal)
///
/// There are no backward moves and no re-open from the terminal states.
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_PENDING => &[STATUS_ASSIGNED, STATUS_CANCELLED],
        STATUS_ASSIGNED => &[STATUS_IN_PROGRESS, STATUS_CANCELLED],
        STATUS_IN_PROGRESS => &[STATUS_RESOLVED],
        _ => &[],
    }
}

/// Validate that a status transition from `current` to `next` is allowed.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    let allowed = valid_transitions(current);
    if allowed.contains(&next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot transition report from '{}' to '{}'. Allowed transitions: {:?}",
            current, next, allowed
        )))
    }
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid report status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

/// Validate that a problem type is in the recognized vocabulary.
pub fn validate_problem_type(problem_type: &str) -> Result<(), CoreError> {
    if VALID_PROBLEM_TYPES.contains(&problem_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid problem type '{}'. Must be one of: {:?}",
            problem_type, VALID_PROBLEM_TYPES
        )))
    }
}

/// Validate the description: required, non-blank, bounded length.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation("Description is required".into()));
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {} characters (got {})",
            MAX_DESCRIPTION_LENGTH,
            description.len()
        )));
    }
    Ok(())
}

/// Validate a WGS84 coordinate pair.
pub fn validate_coordinates(longitude: f64, latitude: f64) -> Result<(), CoreError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CoreError::Validation(format!(
            "Longitude {longitude} out of range [-180, 180]"
        )));
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(CoreError::Validation(format!(
            "Latitude {latitude} out of range [-90, 90]"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Escalation engine
// ---------------------------------------------------------------------------

/// Given a report's validation count *after* an accepted vote and its
/// current status, return the status the report should escalate to, if any.
///
/// Only the threshold crossing escalates: a `pending` report whose count
/// has reached [`ESCALATION_THRESHOLD`] becomes `assigned`. Reports in any
/// other status keep it, no matter how many votes accumulate.
///
/// This is the reference form of the rule. The validation repository
/// applies the same rule as a SQL `CASE` inside the vote transaction so
/// the escalation lands atomically with the counter bump; keep the two in
/// sync when changing either.
pub fn escalation_target(validation_count: i32, status: &str) -> Option<&'static str> {
    if status == STATUS_PENDING && validation_count >= ESCALATION_THRESHOLD {
        Some(STATUS_ASSIGNED)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
