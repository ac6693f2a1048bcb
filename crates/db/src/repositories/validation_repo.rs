//! Repository for the `report_validations` ledger.
//!
//! The validate operation is the concurrency-critical path of the whole
//! system: the ledger insert, the counter bump, and the escalation check
//! run in one transaction so concurrent voters on the same report can
//! neither double-count a vote nor lose an increment.

use sqlx::PgPool;
use waterline_core::report::{ESCALATION_THRESHOLD, PRIORITY_STEP, STATUS_ASSIGNED, STATUS_PENDING};
use waterline_core::types::DbId;

use crate::models::validation::{ReportValidation, ValidationOutcome};

/// Provides the exactly-once voting operation and ledger reads.
pub struct ValidationRepo;

impl ValidationRepo {
    /// Record a validation vote for `(report_id, user_id)`.
    ///
    /// Returns `Ok(Some(outcome))` with the post-vote counters, or
    /// `Ok(None)` when this voter has already validated the report (the
    /// unique constraint `uq_report_validations_report_user` is the
    /// authoritative guard; `ON CONFLICT DO NOTHING` turns the losing
    /// insert of a race into the same `None`). The counter bump is a
    /// single SQL `UPDATE` with relative increments, so concurrent
    /// distinct voters never lose an update, and the escalation CASE is
    /// evaluated in the same statement that moves the count.
    pub async fn validate(
        pool: &PgPool,
        report_id: DbId,
        user_id: DbId,
    ) -> Result<Option<ValidationOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let inserted = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO report_validations (report_id, user_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_report_validations_report_user DO NOTHING \
             RETURNING id",
        )
        .bind(report_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        if inserted.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let outcome = sqlx::query_as::<_, ValidationOutcome>(
            "UPDATE reports SET \
                validation_count = validation_count + 1, \
                priority = priority + $2, \
                status = CASE \
                    WHEN validation_count + 1 >= $3 AND status = $4 THEN $5 \
                    ELSE status \
                END, \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING validation_count, priority, status",
        )
        .bind(report_id)
        .bind(PRIORITY_STEP)
        .bind(ESCALATION_THRESHOLD)
        .bind(STATUS_PENDING)
        .bind(STATUS_ASSIGNED)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(outcome))
    }

    /// Whether a (report, voter) pair already exists. A convenience read;
    /// never a substitute for the constraint.
    pub async fn exists(
        pool: &PgPool,
        report_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(\
                 SELECT 1 FROM report_validations WHERE report_id = $1 AND user_id = $2\
             )",
        )
        .bind(report_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// List the ledger entries for a report, oldest first.
    pub async fn list_for_report(
        pool: &PgPool,
        report_id: DbId,
    ) -> Result<Vec<ReportValidation>, sqlx::Error> {
        sqlx::query_as::<_, ReportValidation>(
            "SELECT id, report_id, user_id, created_at \
             FROM report_validations WHERE report_id = $1 \
             ORDER BY created_at ASC, id ASC",
        )
        .bind(report_id)
        .fetch_all(pool)
        .await
    }
}
