/**
 * Project Handlers
 *
 * HTTP handlers for POST /api/projects and GET /api/projects. Both routes
 * sit behind the auth middleware; the verified identity arrives via the
 * `AuthUser` extractor and is the only source of the owner field.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::projects::store::{create_project, list_projects_by_owner, Project};

/// Create project request
///
/// Fields are optional at the deserialization layer so missing values can
/// be reported as 400 rather than a deserialization failure.
#[derive(Deserialize, Debug)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub data: Option<serde_json::Value>,
}

/// Create project response
#[derive(Serialize, Debug)]
pub struct CreateProjectResponse {
    pub message: String,
    pub project: Project,
}

/// Create a project owned by the authenticated user
///
/// # Errors
///
/// * `400 Bad Request` - If name or data is absent/empty
/// * `403 Forbidden` - Handled by the auth middleware before this runs
/// * `500 Internal Server Error` - On store failure
pub async fn create(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<CreateProjectResponse>), ApiError> {
    let name = request
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::validation("Project name is required"))?;

    let data = request
        .data
        .filter(|d| !d.is_null())
        .ok_or_else(|| ApiError::validation("Project data is required"))?;

    let project = create_project(&pool, user.user_id, &name, &data).await?;

    tracing::info!("Project created: {} ({}) for {}", project.name, project.id, user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(CreateProjectResponse {
            message: "Project created".to_string(),
            project,
        }),
    ))
}

/// List the authenticated user's projects
///
/// Always owner-filtered; other owners' projects are invisible, not an error.
pub async fn list(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = list_projects_by_owner(&pool, user.user_id).await?;
    Ok(Json(projects))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_is_validation_error() {
        let request: CreateProjectRequest =
            serde_json::from_str(r#"{"data": {"x": 1}}"#).unwrap();
        assert!(request.name.is_none());
    }

    #[test]
    fn test_empty_name_is_filtered() {
        let request: CreateProjectRequest =
            serde_json::from_str(r#"{"name": "", "data": {"x": 1}}"#).unwrap();
        assert!(request.name.filter(|n| !n.is_empty()).is_none());
    }

    #[test]
    fn test_null_data_is_filtered() {
        let request: CreateProjectRequest =
            serde_json::from_str(r#"{"name": "p1", "data": null}"#).unwrap();
        assert!(request.data.filter(|d| !d.is_null()).is_none());
    }

    #[test]
    fn test_nested_data_preserved() {
        let request: CreateProjectRequest =
            serde_json::from_str(r#"{"name": "p1", "data": {"a": 1, "b": [2, 3]}}"#).unwrap();
        assert_eq!(
            request.data.unwrap(),
            serde_json::json!({"a": 1, "b": [2, 3]})
        );
    }
}
