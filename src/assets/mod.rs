//! Asset Upload Module
//!
//! Multipart file uploads stored on disk and recorded in the database.
//! Uploaded files are served statically from `/uploads`.

/// Asset model and database operations
pub mod store;

/// HTTP handler for uploads
pub mod handlers;

pub use store::Asset;
