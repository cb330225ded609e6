//! Middleware Module
//!
//! HTTP middleware applied before handlers:
//!
//! - **`auth`** - Bearer-token gate for protected routes
//! - **`rate_limit`** - Per-address request cap for auth endpoints

pub mod auth;
pub mod rate_limit;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use rate_limit::rate_limit_middleware;
