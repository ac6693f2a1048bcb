//! Handlers for the `/news` resource. Listing is public; publishing is
//! staff only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use waterline_core::error::CoreError;
use waterline_core::listing::{clamp_limit, clamp_offset};
use waterline_core::types::DbId;
use waterline_db::models::news::{CreateNewsItem, NewsItem};
use waterline_db::repositories::NewsRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct NewsListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/news
pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<NewsListParams>,
) -> AppResult<Json<DataResponse<Vec<NewsItem>>>> {
    let limit = clamp_limit(params.limit, 20, 100);
    let offset = clamp_offset(params.offset);
    let items = NewsRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/news/{id}
pub async fn get_news_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<NewsItem>>> {
    let item = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "News", id }))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/news
pub async fn create_news_item(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateNewsItem>,
) -> AppResult<(StatusCode, Json<DataResponse<NewsItem>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }
    if input.body.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Body is required".into(),
        )));
    }

    let item = NewsRepo::create(&state.pool, &input).await?;
    tracing::info!(news_id = item.id, "News item published");
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}
