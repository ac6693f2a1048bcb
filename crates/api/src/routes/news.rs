//! Route definitions for the `/news` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// Routes mounted at `/news`.
///
/// ```text
/// GET  /      -> list_news (public)
/// POST /      -> create_news_item (staff only)
/// GET  /{id}  -> get_news_item (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_news).post(news::create_news_item))
        .route("/{id}", get(news::get_news_item))
}
