//! Repository for the `reports` table.

use sqlx::PgPool;
use waterline_core::folio;
use waterline_core::types::{DbId, Timestamp};

use crate::is_unique_violation;
use crate::models::report::{Report, UpdateReport};
use crate::models::tanker::{Tanker, TANKER_AVAILABLE, TANKER_DISPATCHED};

/// Column list for `reports` queries.
const COLUMNS: &str = "\
    id, folio, longitude, latitude, address, problem_type, description, \
    photo_url, resolution_photo_url, staff_note, created_by, \
    validation_count, priority, status, assigned_tanker_id, \
    created_at, updated_at";

/// Attempts at inserting with a freshly generated folio before giving up.
const FOLIO_GENERATION_ATTEMPTS: u32 = 5;

/// Fields the repository needs to insert a report. Coordinates are already
/// resolved (directly supplied or geocoded) by the time this is built.
#[derive(Debug)]
pub struct NewReport<'a> {
    pub problem_type: &'a str,
    pub description: &'a str,
    pub longitude: f64,
    pub latitude: f64,
    pub address: Option<&'a str>,
    pub photo_url: Option<&'a str>,
    pub created_by: Option<DbId>,
}

/// Provides CRUD operations for reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a new report with a generated folio, returning the full row.
    ///
    /// The folio's uniqueness is enforced by `uq_reports_folio`; on a
    /// collision the insert is retried with a fresh folio rather than
    /// trusting the code space alone.
    pub async fn create(pool: &PgPool, input: &NewReport<'_>) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports \
                (folio, longitude, latitude, address, problem_type, \
                 description, photo_url, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );

        let mut last_err = None;
        for _ in 0..FOLIO_GENERATION_ATTEMPTS {
            let folio = folio::generate();
            let result = sqlx::query_as::<_, Report>(&query)
                .bind(&folio)
                .bind(input.longitude)
                .bind(input.latitude)
                .bind(input.address)
                .bind(input.problem_type)
                .bind(input.description)
                .bind(input.photo_url)
                .bind(input.created_by)
                .fetch_one(pool)
                .await;

            match result {
                Ok(report) => return Ok(report),
                Err(err) if is_unique_violation(&err, "uq_reports_folio") => {
                    tracing::warn!(folio, "Folio collision, regenerating");
                    last_err = Some(err);
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_err.expect("retry loop ran at least once"))
    }

    /// Find a report by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a report by its folio code.
    pub async fn find_by_folio(pool: &PgPool, folio: &str) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE folio = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(folio)
            .fetch_optional(pool)
            .await
    }

    /// List reports with optional status / problem-type filters.
    ///
    /// When `public_cutoff` is set (unprivileged viewers), resolved reports
    /// created before the cutoff are excluded; unresolved reports are
    /// always included. Ordering is priority descending, then newest
    /// first, with the id as a stable tie-break.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        problem_type: Option<&str>,
        public_cutoff: Option<Timestamp>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Report>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if problem_type.is_some() {
            conditions.push(format!("problem_type = ${param_idx}"));
            param_idx += 1;
        }
        if public_cutoff.is_some() {
            // Mirrors waterline_core::visibility::is_publicly_listable.
            conditions.push(format!(
                "(status <> 'resolved' OR created_at > ${param_idx})"
            ));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM reports {where_clause} \
             ORDER BY priority DESC, created_at DESC, id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, Report>(&query);

        if let Some(s) = status {
            q = q.bind(s);
        }
        if let Some(pt) = problem_type {
            q = q.bind(pt);
        }
        if let Some(cutoff) = public_cutoff {
            q = q.bind(cutoff);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// List the reports a given user submitted, newest first.
    pub async fn list_by_creator(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reports WHERE created_by = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Creation time of a user's most recent report, feeding the
    /// submission guard.
    pub async fn latest_created_at_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<Timestamp>>(
            "SELECT MAX(created_at) FROM reports WHERE created_by = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Apply a partial update. Only non-`None` fields in `input` are
    /// applied; `updated_at` is always bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReport,
    ) -> Result<Option<Report>, sqlx::Error> {
        let query = format!(
            "UPDATE reports SET \
                problem_type = COALESCE($2, problem_type), \
                description = COALESCE($3, description), \
                address = COALESCE($4, address), \
                photo_url = COALESCE($5, photo_url), \
                status = COALESCE($6, status), \
                staff_note = COALESCE($7, staff_note), \
                resolution_photo_url = COALESCE($8, resolution_photo_url), \
                assigned_tanker_id = COALESCE($9, assigned_tanker_id), \
                priority = COALESCE($10, priority), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(&input.problem_type)
            .bind(&input.description)
            .bind(&input.address)
            .bind(&input.photo_url)
            .bind(&input.status)
            .bind(&input.staff_note)
            .bind(&input.resolution_photo_url)
            .bind(input.assigned_tanker_id)
            .bind(input.priority)
            .fetch_optional(pool)
            .await
    }

    /// Dispatch a tanker to a report, transactionally.
    ///
    /// Flips the tanker to `dispatched` only if it is currently
    /// `available` and sets both references. Returns `None` when the
    /// tanker is missing or not available (the caller decides how to
    /// report that), leaving both rows untouched.
    pub async fn assign_tanker(
        pool: &PgPool,
        report_id: DbId,
        tanker_id: DbId,
    ) -> Result<Option<(Report, Tanker)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let tanker = sqlx::query_as::<_, Tanker>(
            "UPDATE tankers \
             SET status = $3, current_report_id = $2, updated_at = now() \
             WHERE id = $1 AND status = $4 \
             RETURNING id, economic_number, status, current_report_id, \
                       created_at, updated_at",
        )
        .bind(tanker_id)
        .bind(report_id)
        .bind(TANKER_DISPATCHED)
        .bind(TANKER_AVAILABLE)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(tanker) = tanker else {
            tx.rollback().await?;
            return Ok(None);
        };

        let query = format!(
            "UPDATE reports \
             SET assigned_tanker_id = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let report = sqlx::query_as::<_, Report>(&query)
            .bind(report_id)
            .bind(tanker_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some((report, tanker)))
    }
}
