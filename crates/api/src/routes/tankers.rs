//! Route definitions for the `/tankers` resource.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::tankers;
use crate::state::AppState;

/// Routes mounted at `/tankers`.
///
/// ```text
/// GET    /             -> list_tankers (public)
/// POST   /             -> create_tanker (staff only)
/// PATCH  /{id}/status  -> update_tanker_status (staff only)
/// DELETE /{id}         -> delete_tanker (staff only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(tankers::list_tankers).post(tankers::create_tanker),
        )
        .route("/{id}/status", patch(tankers::update_tanker_status))
        .route("/{id}", delete(tankers::delete_tanker))
}
