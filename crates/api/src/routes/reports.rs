//! Route definitions for the `/reports` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET   /               -> list_reports (public, visibility-filtered)
/// POST  /               -> create_report (anonymous allowed)
/// GET   /mine           -> my_reports (requires auth)
/// GET   /{id_or_folio}  -> get_report (public)
/// PATCH /{id}           -> update_report (owner while pending, or staff)
/// POST  /{id}/validate  -> validate_report (requires auth)
/// POST  /{id}/assign-tanker -> assign_tanker (staff only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reports::list_reports).post(reports::create_report))
        .route("/mine", get(reports::my_reports))
        .route(
            "/{id}",
            get(reports::get_report).patch(reports::update_report),
        )
        .route("/{id}/validate", post(reports::validate_report))
        .route("/{id}/assign-tanker", post(reports::assign_tanker))
}
