/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/register.
 *
 * # Registration Process
 *
 * 1. Validate that username and password are non-empty
 * 2. Hash the password with bcrypt
 * 3. Create the user row
 * 4. Return 201 with a confirmation message
 *
 * The endpoint is rate-limited per client address by middleware before the
 * handler runs.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthRequest, MessageResponse};
use crate::auth::users::create_user;
use crate::error::ApiError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If username or password is absent or empty
/// * `500 Internal Server Error` - If hashing or the insert fails
///   (including a duplicate username, which violates the unique constraint)
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<AuthRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (username, password) = request.credentials()?;

    tracing::info!("Register request for username: {}", username);

    let password_hash = hash(&password, DEFAULT_COST)?;

    let user = create_user(&pool, &username, &password_hash).await?;

    tracing::info!("User registered: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_rejected() {
        let request = AuthRequest {
            username: Some("".to_string()),
            password: Some("pw1".to_string()),
        };

        // Validation happens before any store access
        let err = request.credentials().unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_request_deserialization() {
        let json = r#"{"username":"alice","password":"pw1"}"#;
        let request: AuthRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username.as_deref(), Some("alice"));
        assert_eq!(request.password.as_deref(), Some("pw1"));
    }
}
