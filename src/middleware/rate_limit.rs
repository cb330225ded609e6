/**
 * Rate Limit Middleware
 *
 * Applies the fixed-window rate limiter to the registration and login
 * endpoints, keyed by the client's network address. Requests over the cap
 * are rejected with 429 before the handler runs.
 */

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::server::state::AppState;

/// Rate limit middleware for auth endpoints
///
/// Requires the server to be started with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the client
/// address is available.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.rate_limiter.allow(addr.ip()) {
        tracing::warn!("Rate limit exceeded for {}", addr.ip());
        return Err(ApiError::RateLimited);
    }

    Ok(next.run(request).await)
}
