//! Per-submitter cooldown guard on report creation.
//!
//! A synchronous advisory check keyed by the submitter's most recent report
//! creation time. Registration is implicit: the subsequent insert sets a
//! new latest timestamp. Anonymous submissions carry no identity to key on
//! and bypass the guard (see DESIGN.md).

use crate::types::Timestamp;

/// Minimum seconds between two reports from the same submitter.
pub const SUBMISSION_COOLDOWN_SECS: i64 = 600;

/// Outcome of the submission guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionDecision {
    Allowed,
    /// Cooldown active; `wait_secs` is the remaining wait, rounded up to a
    /// whole second for display.
    Denied { wait_secs: i64 },
}

/// Check whether a submitter may create a report at `now`, given the
/// creation time of their most recent report (if any).
pub fn check(last_created_at: Option<Timestamp>, now: Timestamp) -> SubmissionDecision {
    let Some(last) = last_created_at else {
        return SubmissionDecision::Allowed;
    };

    let elapsed = now - last;
    let elapsed_secs = elapsed.num_seconds();
    if elapsed_secs >= SUBMISSION_COOLDOWN_SECS {
        return SubmissionDecision::Allowed;
    }

    // Round the remaining wait up to a whole second so a displayed "wait N
    // seconds" is never an undercount.
    let remaining_ms = SUBMISSION_COOLDOWN_SECS * 1000 - elapsed.num_milliseconds();
    let wait_secs = (remaining_ms + 999) / 1000;
    SubmissionDecision::Denied { wait_secs }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    #[test]
    fn first_report_is_allowed() {
        assert_eq!(check(None, Utc::now()), SubmissionDecision::Allowed);
    }

    #[test]
    fn report_within_cooldown_is_denied_with_remaining_wait() {
        let now = Utc::now();
        let last = now - Duration::seconds(200);
        assert_eq!(
            check(Some(last), now),
            SubmissionDecision::Denied { wait_secs: 400 }
        );
    }

    #[test]
    fn report_after_cooldown_is_allowed() {
        let now = Utc::now();
        let last = now - Duration::seconds(SUBMISSION_COOLDOWN_SECS);
        assert_eq!(check(Some(last), now), SubmissionDecision::Allowed);

        let last = now - Duration::seconds(SUBMISSION_COOLDOWN_SECS + 1);
        assert_eq!(check(Some(last), now), SubmissionDecision::Allowed);
    }

    #[test]
    fn fractional_remaining_wait_rounds_up() {
        let now = Utc::now();
        let last = now - Duration::milliseconds(199_500);
        // 400.5 seconds remain; the hint must read 401, not 400.
        assert_eq!(
            check(Some(last), now),
            SubmissionDecision::Denied { wait_secs: 401 }
        );
    }
}
