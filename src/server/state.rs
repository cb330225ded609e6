/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The database connection pool
 * - The token service (signing key loaded once at startup)
 * - The rate limiter table
 * - The chat hub (live connection set + broadcast channel)
 * - The upload directory
 *
 * All fields are cheap to clone and safe to share across tasks; interior
 * mutability lives inside `RateLimiter` and `ChatHub`.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of the
 * state they need (`State<PgPool>`, `State<TokenService>`, ...) instead of
 * the whole `AppState`.
 */

use std::path::PathBuf;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::rate_limit::RateLimiter;
use crate::auth::tokens::TokenService;
use crate::chat::hub::ChatHub;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,

    /// Token issuance and verification
    ///
    /// Process-wide signing key, loaded at startup; rotated only by
    /// restart.
    pub tokens: TokenService,

    /// Per-address window table for the auth endpoints
    pub rate_limiter: RateLimiter,

    /// Live chat connections and message fan-out
    pub chat_hub: ChatHub,

    /// Directory uploaded assets are written to
    pub upload_dir: PathBuf,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for RateLimiter {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.rate_limiter.clone()
    }
}

impl FromRef<AppState> for ChatHub {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.chat_hub.clone()
    }
}
