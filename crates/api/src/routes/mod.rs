pub mod auth;
pub mod health;
pub mod news;
pub mod profile;
pub mod reports;
pub mod tankers;
pub mod wells;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register citizen account (public)
/// /auth/login                     login (public)
/// /auth/me                        current user info (requires auth)
///
/// /reports                        list (public, visibility-filtered), create
/// /reports/mine                   reports created by the caller (requires auth)
/// /reports/{id_or_folio}          get (public)
/// /reports/{id}                   update (owner while pending, or staff)
/// /reports/{id}/validate          community validation vote (requires auth)
/// /reports/{id}/assign-tanker     dispatch a service unit (staff only)
///
/// /tankers                        list (public), register (staff only)
/// /tankers/{id}/status            update availability (staff only)
/// /tankers/{id}                   delete (staff only)
///
/// /news                           list (public), publish (staff only)
/// /news/{id}                      get (public)
///
/// /wells                          list (public), register (staff only)
/// /wells/{id}                     get (public)
///
/// /profile/me                     get, update own citizen profile
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (register, login, me).
        .nest("/auth", auth::router())
        // Citizen reports: lifecycle, validation votes, dispatch.
        .nest("/reports", reports::router())
        // Service unit fleet: public listing, staff-only mutation.
        .nest("/tankers", tankers::router())
        // Municipal notices.
        .nest("/news", news::router())
        // Water-well infrastructure records.
        .nest("/wells", wells::router())
        // Citizen profile of the authenticated user.
        .nest("/profile", profile::router())
}
