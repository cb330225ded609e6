/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the user ID to handlers.
 *
 * All failure modes (missing header, malformed header, bad signature,
 * expired token) return the same 403 so the caller cannot tell which
 * check failed. The middleware never touches any store; it only attaches
 * the verified identity and lets the downstream handler proceed once.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from a verified JWT
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it against the process signing key
/// 3. Attaches the verified subject to request extensions
///
/// Returns a uniform 403 if the token is missing or invalid.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Forbidden
        })?;

    // Extract token (format: "Bearer <token>")
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::Forbidden
    })?;

    let user_id = state.tokens.verify_subject(token).map_err(|e| {
        tracing::warn!("Token verification failed: {:?}", e.kind());
        ApiError::Forbidden
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter on routes behind `auth_middleware` to get
/// the identity the middleware attached.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Forbidden
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extract_authenticated_user() {
        let mut request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();

        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
        };
        request.extensions_mut().insert(user.clone());

        let extracted = request.extensions().get::<AuthenticatedUser>().cloned();
        assert!(extracted.is_some());
        assert_eq!(extracted.unwrap().user_id, user.user_id);
    }

    #[tokio::test]
    async fn test_extract_authenticated_user_missing() {
        let request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();

        assert!(request.extensions().get::<AuthenticatedUser>().is_none());
    }

    #[test]
    fn test_bearer_prefix_required() {
        // "Token <t>" and bare tokens are rejected the same way as no header
        assert!(("Token abc").strip_prefix("Bearer ").is_none());
        assert!(("abc").strip_prefix("Bearer ").is_none());
        assert_eq!(("Bearer abc").strip_prefix("Bearer "), Some("abc"));
    }
}
