/**
 * Asset Model and Database Operations
 *
 * Assets are uploaded files recorded by name and on-disk path. Blob storage
 * itself is an external collaborator; this module only records metadata.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Asset struct representing an uploaded file in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Asset {
    /// Unique asset ID (UUID)
    pub id: Uuid,
    /// Original file name as uploaded
    pub name: String,
    /// On-disk path the file was stored at
    pub path: String,
    /// Uploaded at timestamp
    pub uploaded_at: DateTime<Utc>,
}

/// Record an uploaded asset
pub async fn create_asset(
    pool: &PgPool,
    name: &str,
    path: &str,
) -> Result<Asset, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let asset = sqlx::query_as::<_, Asset>(
        r#"
        INSERT INTO assets (id, name, path, uploaded_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, path, uploaded_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(path)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(asset)
}
