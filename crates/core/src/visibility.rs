//! Public-map visibility rules.
//!
//! Resolved reports age out of public listings after a fixed window so the
//! map is not cluttered with old, fixed problems. Unresolved reports never
//! age out. Staff listings are unfiltered; callers apply this check only
//! for unprivileged viewers.

use chrono::Duration;

use crate::report::STATUS_RESOLVED;
use crate::types::Timestamp;

/// Days a resolved report stays on the public map.
pub const PUBLIC_RESOLVED_AGE_OUT_DAYS: i64 = 30;

/// Whether a report is visible to an unprivileged (citizen / anonymous)
/// viewer at time `now`.
///
/// True if the report is younger than [`PUBLIC_RESOLVED_AGE_OUT_DAYS`] or
/// not yet resolved. An outstanding problem stays visible indefinitely.
///
/// This is the reference form of the rule. `ReportRepo::list_filtered`
/// mirrors it as a SQL predicate (against a cutoff computed from the same
/// constant) so filtering happens in the database; keep the two in sync
/// when changing either.
pub fn is_publicly_listable(status: &str, created_at: Timestamp, now: Timestamp) -> bool {
    status != STATUS_RESOLVED
        || now - created_at < Duration::days(PUBLIC_RESOLVED_AGE_OUT_DAYS)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::report::{STATUS_PENDING, STATUS_RESOLVED};

    #[test]
    fn resolved_report_older_than_window_is_hidden() {
        let now = Utc::now();
        let created = now - Duration::days(31);
        assert!(!is_publicly_listable(STATUS_RESOLVED, created, now));
    }

    #[test]
    fn resolved_report_within_window_is_visible() {
        let now = Utc::now();
        let created = now - Duration::days(29);
        assert!(is_publicly_listable(STATUS_RESOLVED, created, now));
    }

    #[test]
    fn stale_pending_report_never_ages_out() {
        let now = Utc::now();
        let created = now - Duration::days(400);
        assert!(is_publicly_listable(STATUS_PENDING, created, now));
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let now = Utc::now();
        let created = now - Duration::days(PUBLIC_RESOLVED_AGE_OUT_DAYS);
        assert!(!is_publicly_listable(STATUS_RESOLVED, created, now));
    }
}
