/**
 * API Route Handlers
 *
 * This module wires up the REST endpoints:
 *
 * ## Rate-limited (per client address)
 * - `POST /api/register` - User registration
 * - `POST /api/login` - User login
 *
 * ## Bearer token required
 * - `POST /api/projects` - Create a project
 * - `GET /api/projects` - List the caller's projects
 *
 * ## Public
 * - `POST /api/assets` - Upload an asset file
 * - `GET /api/physics-simulate` - Placeholder, not implemented
 * - `GET /api/health` - Health check
 */

use axum::{middleware, response::Json, routing, Router};

use crate::assets::handlers::upload;
use crate::auth::handlers::types::MessageResponse;
use crate::auth::{login, register};
use crate::middleware::{auth_middleware, rate_limit_middleware};
use crate::projects::handlers as project_handlers;
use crate::server::state::AppState;

/// Configure API routes
///
/// The auth gate and rate limiter are applied as explicit route layers on
/// the groups that need them, rather than as a global middleware stack, so
/// the protection each route carries is visible here.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    // Auth endpoints: rate-limited per client address
    let auth_routes = Router::new()
        .route("/api/register", routing::post(register))
        .route("/api/login", routing::post(login))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    // Project endpoints: bearer token required
    let project_routes = Router::new()
        .route(
            "/api/projects",
            routing::post(project_handlers::create).get(project_handlers::list),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    router
        .merge(auth_routes)
        .merge(project_routes)
        .route("/api/assets", routing::post(upload))
        .route("/api/physics-simulate", routing::get(physics_simulate))
        .route("/api/health", routing::get(health))
}

/// Health check
async fn health() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "API is healthy".to_string(),
    })
}

/// Physics engine placeholder
async fn physics_simulate() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Physics simulation not implemented".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_message() {
        let Json(response) = health().await;
        assert_eq!(response.message, "API is healthy");
    }

    #[tokio::test]
    async fn test_physics_placeholder_message() {
        let Json(response) = physics_simulate().await;
        assert_eq!(response.message, "Physics simulation not implemented");
    }
}
