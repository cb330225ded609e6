//! Authentication Module
//!
//! This module handles user registration, login, token issuance, and
//! rate limiting of the authentication endpoints.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`tokens`** - JWT issuance and verification
//! - **`rate_limit`** - Fixed-window request limiter for auth endpoints
//! - **`handlers`** - HTTP handlers for register and login
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → bcrypt hash → user row created
//! 2. **Login**: credentials verified → 1-hour JWT returned
//! 3. **Protected routes**: bearer token verified by the auth middleware
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never logged
//! - Invalid credentials return a uniform 401 (no information leakage)
//! - Register and login are rate-limited per client address

/// User data model and database operations
pub mod users;

/// JWT issuance and verification
pub mod tokens;

/// Fixed-window rate limiter
pub mod rate_limit;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthRequest, MessageResponse, TokenResponse};
pub use handlers::{login, register};
pub use rate_limit::RateLimiter;
pub use tokens::TokenService;
