/**
 * Project Model and Database Operations
 *
 * Projects are schema-less documents owned by a single user. The `data`
 * payload is stored as JSONB and returned unchanged; this module never
 * interprets it. Reads are always filtered by owner.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Project struct representing a project document in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Unique project ID (UUID)
    pub id: Uuid,
    /// Project name (non-empty)
    pub name: String,
    /// Opaque structured payload, arbitrary nested shape
    pub data: serde_json::Value,
    /// Owner's user ID, set from the verified token subject
    pub owner: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new project
///
/// The owner comes from the verified token, never from client input, so
/// owner spoofing is impossible.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `owner` - Verified owner identity
/// * `name` - Project name
/// * `data` - Opaque project payload
///
/// # Returns
/// The stored project including its assigned ID, or error
pub async fn create_project(
    pool: &PgPool,
    owner: Uuid,
    name: &str,
    data: &serde_json::Value,
) -> Result<Project, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let project = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (id, name, data, owner, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, data, owner, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(sqlx::types::Json(data))
    .bind(owner)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(project)
}

/// List all projects owned by the given user
///
/// Returns every matching record; a caller that owns nothing gets an empty
/// list, never an error, so listing cannot reveal other owners' records.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `owner` - Verified owner identity
///
/// # Returns
/// All projects whose owner matches, or error
pub async fn list_projects_by_owner(
    pool: &PgPool,
    owner: Uuid,
) -> Result<Vec<Project>, sqlx::Error> {
    let projects = sqlx::query_as::<_, Project>(
        r#"
        SELECT id, name, data, owner, created_at
        FROM projects
        WHERE owner = $1
        "#,
    )
    .bind(owner)
    .fetch_all(pool)
    .await?;

    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_data_round_trips_structurally() {
        let data = serde_json::json!({"a": 1, "b": [2, 3]});
        let project = Project {
            id: Uuid::new_v4(),
            name: "p1".to_string(),
            data: data.clone(),
            owner: Uuid::new_v4(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back.data, data);
    }
}
