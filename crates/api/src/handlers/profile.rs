//! Handlers for the authenticated citizen profile (`/profile/me`).

use axum::extract::State;
use axum::Json;
use waterline_core::error::CoreError;
use waterline_db::models::profile::{CitizenProfile, UpdateProfile};
use waterline_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile/me
pub async fn get_my_profile(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CitizenProfile>>> {
    let profile = ProfileRepo::find_by_user(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }))?;

    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/profile/me
///
/// Partial update: only fields present in the body are changed.
pub async fn update_my_profile(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<CitizenProfile>>> {
    if let Some(phone) = &input.phone {
        if phone.len() > 20 {
            return Err(AppError::Core(CoreError::Validation(
                "Phone number must be at most 20 characters".into(),
            )));
        }
    }

    let profile = ProfileRepo::update_for_user(&state.pool, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }))?;

    Ok(Json(DataResponse { data: profile }))
}
