//! API Error Module
//!
//! This module defines the error types used by HTTP handlers and the
//! WebSocket chat channel, and their conversion to HTTP responses.
//!
//! # Error Taxonomy
//!
//! - `Validation` - Missing/malformed input (400)
//! - `Unauthenticated` - Bad login credentials (401, uniform message)
//! - `Forbidden` - Missing/invalid/expired bearer token (403, uniform message)
//! - `RateLimited` - Too many attempts on an auth endpoint (429)
//! - `Store` / `Hash` / `Token` - Internal failures (500, opaque message)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
