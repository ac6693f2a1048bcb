//! Handlers for the `/tankers` resource. The fleet listing is public
//! (read-only, like news and wells); mutation is staff only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use waterline_core::error::CoreError;
use waterline_core::types::DbId;
use waterline_db::models::tanker::{
    CreateTanker, Tanker, UpdateTankerStatus, VALID_TANKER_STATUSES,
};
use waterline_db::repositories::TankerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tankers
pub async fn list_tankers(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Tanker>>>> {
    let tankers = TankerRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tankers }))
}

/// POST /api/v1/tankers
pub async fn create_tanker(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateTanker>,
) -> AppResult<(StatusCode, Json<DataResponse<Tanker>>)> {
    if input.economic_number.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Economic number is required".into(),
        )));
    }

    let tanker = TankerRepo::create(&state.pool, &input).await?;
    tracing::info!(tanker_id = tanker.id, economic_number = %tanker.economic_number, "Tanker registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: tanker })))
}

/// PATCH /api/v1/tankers/{id}/status
pub async fn update_tanker_status(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTankerStatus>,
) -> AppResult<Json<DataResponse<Tanker>>> {
    if !VALID_TANKER_STATUSES.contains(&input.status.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid tanker status: '{}'",
            input.status
        ))));
    }

    let tanker = TankerRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tanker",
            id,
        }))?;

    Ok(Json(DataResponse { data: tanker }))
}

/// DELETE /api/v1/tankers/{id}
pub async fn delete_tanker(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TankerRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Tanker",
            id,
        }));
    }
    tracing::info!(tanker_id = id, "Tanker deleted");
    Ok(StatusCode::NO_CONTENT)
}
