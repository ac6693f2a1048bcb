//! Repositories for the informational `news` and `wells` tables.

use sqlx::PgPool;
use waterline_core::types::DbId;

use crate::models::news::{CreateNewsItem, CreateWell, NewsItem, Well};

/// Column list for `news` queries.
const NEWS_COLUMNS: &str = "id, title, body, image_url, published_at";

/// Column list for `wells` queries.
const WELL_COLUMNS: &str = "id, name, longitude, latitude, status, created_at";

/// Read-mostly municipal notices.
pub struct NewsRepo;

impl NewsRepo {
    /// Publish a news item.
    pub async fn create(pool: &PgPool, input: &CreateNewsItem) -> Result<NewsItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO news (title, body, image_url) \
             VALUES ($1, $2, $3) \
             RETURNING {NEWS_COLUMNS}"
        );
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// List news items, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<NewsItem>, sqlx::Error> {
        let query = format!(
            "SELECT {NEWS_COLUMNS} FROM news \
             ORDER BY published_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a news item by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<NewsItem>, sqlx::Error> {
        let query = format!("SELECT {NEWS_COLUMNS} FROM news WHERE id = $1");
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Water-well infrastructure records.
pub struct WellRepo;

impl WellRepo {
    /// Register a well.
    pub async fn create(pool: &PgPool, input: &CreateWell) -> Result<Well, sqlx::Error> {
        let query = format!(
            "INSERT INTO wells (name, longitude, latitude, status) \
             VALUES ($1, $2, $3, COALESCE($4, 'operational')) \
             RETURNING {WELL_COLUMNS}"
        );
        sqlx::query_as::<_, Well>(&query)
            .bind(&input.name)
            .bind(input.longitude)
            .bind(input.latitude)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List all wells ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Well>, sqlx::Error> {
        let query = format!("SELECT {WELL_COLUMNS} FROM wells ORDER BY name ASC");
        sqlx::query_as::<_, Well>(&query).fetch_all(pool).await
    }

    /// Find a well by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Well>, sqlx::Error> {
        let query = format!("SELECT {WELL_COLUMNS} FROM wells WHERE id = $1");
        sqlx::query_as::<_, Well>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
