//! Handlers for the `/reports` resource: creation (rate-limited), public
//! and staff listings, retrieval by id or folio, role-checked updates,
//! validation votes, and tanker assignment.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use serde::Deserialize;

use waterline_core::error::CoreError;
use waterline_core::listing::{clamp_limit, clamp_offset};
use waterline_core::types::DbId;
use waterline_core::visibility::PUBLIC_RESOLVED_AGE_OUT_DAYS;
use waterline_core::{permissions, report, submission};
use waterline_db::models::report::{CreateReport, Report, ReportListParams, UpdateReport};
use waterline_db::repositories::report_repo::NewReport;
use waterline_db::repositories::{ReportRepo, TankerRepo, ValidationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /reports
// ---------------------------------------------------------------------------

/// Submit a new report.
///
/// Authenticated submitters pass through the cooldown guard; anonymous
/// submissions carry no identity to key on and bypass it. Coordinates may
/// be supplied directly or resolved from the free-text address via the
/// geocoding collaborator.
pub async fn create_report(
    MaybeUser(user): MaybeUser,
    State(state): State<AppState>,
    Json(input): Json<CreateReport>,
) -> AppResult<impl IntoResponse> {
    report::validate_problem_type(&input.problem_type)?;
    report::validate_description(&input.description)?;

    // Rate limit per authenticated submitter.
    if let Some(ref user) = user {
        let last = ReportRepo::latest_created_at_for_user(&state.pool, user.user_id).await?;
        if let submission::SubmissionDecision::Denied { wait_secs } =
            submission::check(last, Utc::now())
        {
            return Err(AppError::Core(CoreError::RateLimited { wait_secs }));
        }
    }

    // Resolve coordinates: supplied directly, or geocoded from the address.
    let (longitude, latitude) = match (input.longitude, input.latitude) {
        (Some(lon), Some(lat)) => (lon, lat),
        (None, None) => {
            let address = input.address.as_deref().ok_or_else(|| {
                AppError::Core(CoreError::Validation(
                    "Either coordinates or an address are required".into(),
                ))
            })?;
            let geocoder = state.geocoder.as_ref().ok_or_else(|| {
                AppError::Core(CoreError::Validation(
                    "Coordinates are required (geocoding is not configured)".into(),
                ))
            })?;
            geocoder.lookup(address).await?
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Longitude and latitude must be supplied together".into(),
            )))
        }
    };
    report::validate_coordinates(longitude, latitude)?;

    let new_report = NewReport {
        problem_type: &input.problem_type,
        description: &input.description,
        longitude,
        latitude,
        address: input.address.as_deref(),
        photo_url: input.photo_url.as_deref(),
        created_by: user.as_ref().map(|u| u.user_id),
    };
    let created = ReportRepo::create(&state.pool, &new_report).await?;

    tracing::info!(
        report_id = created.id,
        folio = %created.folio,
        problem_type = %created.problem_type,
        submitter = ?created.created_by,
        "Report submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /reports
// ---------------------------------------------------------------------------

/// List reports for the public map or the staff triage table.
///
/// Staff see everything; other viewers get the visibility filter (resolved
/// reports age out after 30 days, unresolved never do).
pub async fn list_reports(
    MaybeUser(user): MaybeUser,
    State(state): State<AppState>,
    Query(params): Query<ReportListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref s) = params.status {
        report::validate_status(s)?;
    }
    if let Some(ref pt) = params.problem_type {
        report::validate_problem_type(pt)?;
    }

    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let is_staff = user.as_ref().is_some_and(|u| u.is_staff());
    let public_cutoff = if is_staff {
        None
    } else {
        Some(Utc::now() - Duration::days(PUBLIC_RESOLVED_AGE_OUT_DAYS))
    };

    let reports = ReportRepo::list_filtered(
        &state.pool,
        params.status.as_deref(),
        params.problem_type.as_deref(),
        public_cutoff,
        limit,
        offset,
    )
    .await?;

    Ok(Json(DataResponse { data: reports }))
}

// ---------------------------------------------------------------------------
// GET /reports/mine
// ---------------------------------------------------------------------------

/// List the authenticated user's own reports, newest first.
pub async fn my_reports(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<ReportListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let reports = ReportRepo::list_by_creator(&state.pool, user.user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: reports }))
}

// ---------------------------------------------------------------------------
// GET /reports/:id_or_folio
// ---------------------------------------------------------------------------

/// Get a single report by numeric id or by folio code.
pub async fn get_report(
    State(state): State<AppState>,
    Path(id_or_folio): Path<String>,
) -> AppResult<impl IntoResponse> {
    let report = find_report(&state, &id_or_folio).await?;
    Ok(Json(DataResponse { data: report }))
}

/// Resolve a path segment to a report: digits look up by id, anything
/// else by folio.
async fn find_report(state: &AppState, id_or_folio: &str) -> Result<Report, AppError> {
    let report = match id_or_folio.parse::<DbId>() {
        Ok(id) => ReportRepo::find_by_id(&state.pool, id).await?,
        Err(_) => ReportRepo::find_by_folio(&state.pool, id_or_folio).await?,
    };
    report.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Report",
        id: id_or_folio.parse().unwrap_or(0),
    }))
}

// ---------------------------------------------------------------------------
// PATCH /reports/:id
// ---------------------------------------------------------------------------

/// Update a report.
///
/// Which fields may be touched depends on the caller's role (the
/// declarative table in `waterline_core::permissions`): citizens edit the
/// content of their own still-pending reports, staff drive the lifecycle
/// and triage fields. Status changes are validated against the state
/// machine.
pub async fn update_report(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReport>,
) -> AppResult<impl IntoResponse> {
    let current = ReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;

    // Field-level role check, then ownership for non-staff callers.
    let touched = input.touched_fields();
    permissions::check_patch(&touched, &user.role, &current.status)?;
    if !user.is_staff() && current.created_by != Some(user.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only edit your own reports".into(),
        )));
    }

    // Validate the content fields being changed.
    if let Some(ref pt) = input.problem_type {
        report::validate_problem_type(pt)?;
    }
    if let Some(ref desc) = input.description {
        report::validate_description(desc)?;
    }
    if let Some(ref next) = input.status {
        report::validate_status(next)?;
        report::validate_transition(&current.status, next)?;
    }
    if let Some(priority) = input.priority {
        if priority < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Priority cannot be negative".into(),
            )));
        }
    }
    if let Some(tanker_id) = input.assigned_tanker_id {
        TankerRepo::find_by_id(&state.pool, tanker_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Tanker",
                id: tanker_id,
            }))?;
    }

    let updated = ReportRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;

    if let Some(ref next) = input.status {
        tracing::info!(
            report_id = id,
            from = %current.status,
            to = %next,
            user_id = user.user_id,
            "Report status updated",
        );
    }

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// POST /reports/:id/validate
// ---------------------------------------------------------------------------

/// Cast a validation vote on a report.
///
/// Exactly-once per (report, voter): the ledger's unique constraint is
/// the authoritative guard, so a concurrent duplicate deterministically
/// loses and observes the conflict error. An accepted vote bumps the
/// counters and may auto-escalate a pending report, all in one
/// transaction.
pub async fn validate_report(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Existence pre-check for a clean 404; the constraint still guards
    // the race.
    ReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;

    let outcome = ValidationRepo::validate(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::AlreadyValidated {
            report_id: id,
        }))?;

    tracing::info!(
        report_id = id,
        user_id = user.user_id,
        validation_count = outcome.validation_count,
        priority = outcome.priority,
        status = %outcome.status,
        "Report validated",
    );

    Ok(Json(DataResponse { data: outcome }))
}

// ---------------------------------------------------------------------------
// POST /reports/:id/assign
// ---------------------------------------------------------------------------

/// Request body for tanker assignment.
#[derive(Debug, Deserialize)]
pub struct AssignTankerRequest {
    pub tanker_id: DbId,
}

/// Dispatch a tanker to a report. Staff only.
pub async fn assign_tanker(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignTankerRequest>,
) -> AppResult<impl IntoResponse> {
    ReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;
    TankerRepo::find_by_id(&state.pool, input.tanker_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tanker",
            id: input.tanker_id,
        }))?;

    let (report, tanker) = ReportRepo::assign_tanker(&state.pool, id, input.tanker_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Tanker {} is not available for dispatch",
                input.tanker_id
            )))
        })?;

    tracing::info!(
        report_id = id,
        tanker_id = tanker.id,
        economic_number = %tanker.economic_number,
        user_id = staff.user_id,
        "Tanker dispatched to report",
    );

    Ok(Json(DataResponse { data: report }))
}
