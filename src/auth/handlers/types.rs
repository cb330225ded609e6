/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register and login handlers.
 */

use serde::{Deserialize, Serialize};

/// Register/login request
///
/// Both endpoints take the same credential pair. Fields are optional at the
/// deserialization layer so missing values can be reported as 400 rather
/// than a deserialization failure.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AuthRequest {
    /// Username (unique, non-empty)
    pub username: Option<String>,
    /// Password (hashed before storage, never logged)
    pub password: Option<String>,
}

impl AuthRequest {
    /// Extract the credential pair, rejecting absent or empty fields
    pub fn credentials(self) -> Result<(String, String), crate::error::ApiError> {
        let username = self
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| crate::error::ApiError::validation("Username is required"))?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| crate::error::ApiError::validation("Password is required"))?;
        Ok((username, password))
    }
}

/// Login response carrying the signed bearer token
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// JWT, valid for 1 hour
    pub token: String,
}

/// Generic message response
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use axum::http::StatusCode;

    #[test]
    fn test_credentials_present() {
        let request = AuthRequest {
            username: Some("alice".to_string()),
            password: Some("pw1".to_string()),
        };
        let (username, password) = request.credentials().unwrap();
        assert_eq!(username, "alice");
        assert_eq!(password, "pw1");
    }

    #[test]
    fn test_missing_field_is_validation_error() {
        // An absent field deserializes to None and maps to 400, the same
        // path an empty string takes
        let request: AuthRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        let err = request.credentials().unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_empty_field_is_validation_error() {
        let request = AuthRequest {
            username: Some("alice".to_string()),
            password: Some(String::new()),
        };
        assert!(matches!(
            request.credentials(),
            Err(ApiError::Validation { .. })
        ));
    }
}
