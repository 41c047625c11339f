//! Museum Database Layer
//!
//! This crate provides the store traits the review and upload status operations
//! depend on, and their PostgreSQL implementations.
//!
// Module declarations
pub mod db;
pub mod store_traits;

// Re-exports: PostgreSQL stores
pub use db::{PostgresSkinStore, PostgresUploadStore};

// Re-exports: Store traits
pub use store_traits::{SkinStore, UploadStore};
