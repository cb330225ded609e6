/**
 * API Error Types
 *
 * This module defines the error types returned by HTTP handlers.
 * Each variant maps to an HTTP status code and a client-facing message.
 *
 * # Information Leakage
 *
 * Authentication failures are deliberately uniform: `Unauthenticated` and
 * `Forbidden` carry fixed messages so a caller cannot distinguish a missing
 * user from a wrong password, or a malformed token from an expired one.
 * Internal failures (`Store`, `Hash`, `Token`) log the underlying cause but
 * return an opaque message to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error types
///
/// This enum represents all errors that can surface from an HTTP handler.
/// Each variant converts to an HTTP response via `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input (e.g., empty project name)
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the invalid field
        message: String,
    },

    /// Invalid login credentials
    ///
    /// The message is fixed regardless of whether the username or the
    /// password was wrong.
    #[error("Invalid credentials")]
    Unauthenticated,

    /// Missing, malformed, expired, or forged bearer token
    ///
    /// The message is fixed regardless of which check failed.
    #[error("Invalid token")]
    Forbidden,

    /// Too many requests to a rate-limited endpoint
    #[error("Too many requests, please try again later")]
    RateLimited,

    /// Underlying persistence failure
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Filesystem failure while storing an upload
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Store(_) | Self::Hash(_) | Self::Token(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal failures return an opaque message; the underlying cause is
    /// only logged server-side.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::Unauthenticated => "Invalid credentials".to_string(),
            Self::Forbidden => "Invalid token".to_string(),
            Self::RateLimited => "Too many requests, please try again later".to_string(),
            Self::Store(_) | Self::Hash(_) | Self::Token(_) | Self::Io(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ApiError::validation("Name is required");
        match error {
            ApiError::Validation { message } => {
                assert_eq!(message, "Name is required");
            }
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::Store(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_messages_are_uniform() {
        // The client-facing message must not reveal which check failed.
        assert_eq!(ApiError::Unauthenticated.message(), "Invalid credentials");
        assert_eq!(ApiError::Forbidden.message(), "Invalid token");
    }

    #[test]
    fn test_store_error_message_is_opaque() {
        let error = ApiError::Store(sqlx::Error::RowNotFound);
        assert_eq!(error.message(), "Internal server error");
        assert!(!error.message().contains("RowNotFound"));
    }
}
