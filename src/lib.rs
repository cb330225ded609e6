//! KridArt Engine Backend
//!
//! Backend server for the KridArt game engine. It provides:
//! - Token-based authentication (register/login with bcrypt + JWT)
//! - Ownership-scoped project persistence (PostgreSQL via sqlx)
//! - Asset uploads stored on disk and served statically
//! - A real-time WebSocket chat channel with full-history replay
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, tokens, rate limiting, register/login handlers
//! - **`middleware`** - Auth gate and rate-limit middleware
//! - **`projects`** - Project store and handlers
//! - **`assets`** - Asset upload store and handler
//! - **`chat`** - Chat hub, message store, WebSocket handler
//! - **`error`** - API error types and HTTP conversion

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication, tokens, users, rate limiting
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Project persistence and handlers
pub mod projects;

/// Asset uploads
pub mod assets;

/// Real-time chat channel
pub mod chat;

/// API error types
pub mod error;

pub use error::ApiError;
pub use server::state::AppState;
