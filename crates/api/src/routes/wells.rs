//! Route definitions for the `/wells` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::wells;
use crate::state::AppState;

/// Routes mounted at `/wells`.
///
/// ```text
/// GET  /      -> list_wells (public)
/// POST /      -> create_well (staff only)
/// GET  /{id}  -> get_well (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wells::list_wells).post(wells::create_well))
        .route("/{id}", get(wells::get_well))
}
