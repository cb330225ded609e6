//! Project Persistence Module
//!
//! Ownership-scoped storage of schema-less project documents. The store
//! performs no authentication; both handlers are only reachable through the
//! auth middleware, which supplies the verified owner identity.

/// Project model and database operations
pub mod store;

/// HTTP handlers for project routes
pub mod handlers;

pub use store::Project;
