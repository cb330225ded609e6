/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt (constant-time comparison)
 * 3. Issue a 1-hour JWT with the user's ID as subject
 *
 * # Security
 *
 * - Unknown username and wrong password both return the same 401, so the
 *   response never reveals which field was wrong
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthRequest, TokenResponse};
use crate::auth::tokens::TokenService;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If username or password is absent or empty
/// * `401 Unauthorized` - If the user is not found or the password is wrong
/// * `500 Internal Server Error` - If the lookup, verification, or token
///   signing fails
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (username, password) = request.credentials()?;

    tracing::info!("Login request for username: {}", username);

    let pool: &PgPool = &state.db_pool;
    let tokens: &TokenService = &state.tokens;

    let user = get_user_by_username(pool, &username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed: user not found: {}", username);
            ApiError::Unauthenticated
        })?;

    let valid = verify(&password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed: invalid password for user: {}", username);
        return Err(ApiError::Unauthenticated);
    }

    let token = tokens.issue(user.id)?;

    tracing::info!("User logged in: {} ({})", user.username, user.id);

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_unknown_user_and_bad_password_are_indistinguishable() {
        // Both failure paths produce the same variant and message
        let not_found = ApiError::Unauthenticated;
        let bad_password = ApiError::Unauthenticated;
        assert_eq!(not_found.message(), bad_password.message());
        assert_eq!(not_found.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_response_serialization() {
        let response = TokenResponse {
            token: "abc".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"token":"abc"}"#);
    }
}
