//! Server Module
//!
//! Server setup: configuration loading, application state, and
//! initialization of the Axum app.

/// Configuration loading and database connection
pub mod config;

/// Application state and `FromRef` implementations
pub mod state;

/// App construction
pub mod init;

pub use init::create_app;
pub use state::AppState;
