//! Route definitions for the `/profile` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile`.
///
/// ```text
/// GET /me  -> get_my_profile (requires auth)
/// PUT /me  -> update_my_profile (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/me",
        get(profile::get_my_profile).put(profile::update_my_profile),
    )
}
