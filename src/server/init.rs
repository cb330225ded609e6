/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * state creation, database connection, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations (required; startup aborts
 *    on failure)
 * 2. Build the token service from the configured secret
 * 3. Create the rate limiter and chat hub
 * 4. Configure the router
 * 5. Start the periodic rate-limiter eviction task
 */

use axum::Router;
use std::time::Duration;

use crate::auth::rate_limit::RateLimiter;
use crate::auth::tokens::TokenService;
use crate::chat::hub::ChatHub;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, Config};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the underlying sqlx error if the database connection or the
/// migrations fail; the server does not start without its store.
pub async fn create_app(config: Config) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing KridArt backend server");

    let db_pool = connect_database(&config).await?;

    let app_state = AppState {
        db_pool,
        tokens: TokenService::new(&config.jwt_secret),
        rate_limiter: RateLimiter::new(),
        chat_hub: ChatHub::new(),
        upload_dir: config.upload_dir.clone(),
    };

    let app = create_router(app_state.clone());

    // Periodically drop expired rate-limiter windows so idle addresses
    // don't keep entries around forever.
    let limiter = app_state.rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            limiter.evict_expired();
            tracing::debug!("Evicted expired rate-limit windows ({} keys tracked)", limiter.tracked_keys());
        }
    });

    tracing::info!("Router configured");

    Ok(app)
}
