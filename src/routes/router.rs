/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Groups
 *
 * 1. WebSocket chat channel (`GET /ws`)
 * 2. API routes (auth, projects, assets, health)
 * 3. Static file serving for uploaded assets (`/uploads`)
 * 4. Fallback handler (404)
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::services::ServeDir;

use crate::chat::socket::ws_handler;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/ws", axum::routing::get(ws_handler));

    // Add API routes (auth, projects, assets, health)
    let router = configure_api_routes(router, &app_state);

    // Serve uploaded assets statically
    let router = router.nest_service("/uploads", ServeDir::new(&app_state.upload_dir));

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.with_state(app_state)
}
