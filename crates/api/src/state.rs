use std::sync::Arc;

use crate::config::ServerConfig;
use crate::geocode::GeocodeClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: waterline_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// External address -> coordinate lookup; `None` when no geocoder is
    /// configured (address-only submissions are then rejected).
    pub geocoder: Option<Arc<GeocodeClient>>,
}
