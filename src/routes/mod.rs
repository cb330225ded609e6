//! Route Configuration Module
//!
//! Router assembly for the HTTP API and the WebSocket chat channel.

/// Main router creation
pub mod router;

/// API route wiring
pub mod api_routes;

pub use router::create_router;
