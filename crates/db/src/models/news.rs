//! Informational record models: municipal news and water wells.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waterline_core::types::{DbId, Timestamp};

/// A row from the `news` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsItem {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub published_at: Timestamp,
}

/// DTO for publishing a news item.
#[derive(Debug, Deserialize)]
pub struct CreateNewsItem {
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
}

/// A row from the `wells` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Well {
    pub id: DbId,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for registering a well.
#[derive(Debug, Deserialize)]
pub struct CreateWell {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub status: Option<String>,
}
