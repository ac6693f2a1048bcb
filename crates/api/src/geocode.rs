//! Client for the external address -> coordinate geocoding collaborator.
//!
//! The service is expected to answer
//! `GET {base_url}/geocode?address=...` with `{ "longitude": x,
//! "latitude": y }` and a non-2xx status when the address cannot be
//! resolved. A failed lookup is retried once; after that it surfaces as
//! [`CoreError::Upstream`], never a crash of report creation.

use std::time::Duration;

use serde::Deserialize;
use waterline_core::error::CoreError;

/// Per-attempt timeout for geocoding lookups.
const LOOKUP_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    longitude: f64,
    latitude: f64,
}

/// HTTP client for the geocoding service.
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .build()
            .expect("reqwest client construction cannot fail with static config");
        Self { http, base_url }
    }

    /// Resolve a free-text address into WGS84 coordinates.
    ///
    /// Retries exactly once on failure (no retry storm); both attempts
    /// failing maps to `CoreError::Upstream`.
    pub async fn lookup(&self, address: &str) -> Result<(f64, f64), CoreError> {
        match self.attempt(address).await {
            Ok(point) => Ok(point),
            Err(first) => {
                tracing::warn!(error = %first, address, "Geocoding failed, retrying once");
                self.attempt(address).await.map_err(|err| {
                    CoreError::Upstream(format!("geocoding failed after retry: {err}"))
                })
            }
        }
    }

    async fn attempt(&self, address: &str) -> Result<(f64, f64), reqwest::Error> {
        let url = format!("{}/geocode", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .query(&[("address", address)])
            .send()
            .await?
            .error_for_status()?;
        let body: GeocodeResponse = response.json().await?;
        Ok((body.longitude, body.latitude))
    }
}
