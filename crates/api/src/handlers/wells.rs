//! Handlers for the `/wells` resource. Reads are public; registration is
//! staff only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use waterline_core::error::CoreError;
use waterline_core::report::validate_coordinates;
use waterline_core::types::DbId;
use waterline_db::models::news::{CreateWell, Well};
use waterline_db::repositories::WellRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/wells
pub async fn list_wells(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Well>>>> {
    let wells = WellRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: wells }))
}

/// GET /api/v1/wells/{id}
pub async fn get_well(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Well>>> {
    let well = WellRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Well", id }))?;
    Ok(Json(DataResponse { data: well }))
}

/// POST /api/v1/wells
pub async fn create_well(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateWell>,
) -> AppResult<(StatusCode, Json<DataResponse<Well>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name is required".into(),
        )));
    }
    validate_coordinates(input.longitude, input.latitude).map_err(AppError::Core)?;

    let well = WellRepo::create(&state.pool, &input).await?;
    tracing::info!(well_id = well.id, name = %well.name, "Well registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: well })))
}
