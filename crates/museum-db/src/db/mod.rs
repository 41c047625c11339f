//! Database repositories for data access layer
//!
//! Each repository is responsible for one table family and implements the
//! matching store trait from [`crate::store_traits`].

pub mod skin;
pub mod upload;

pub use skin::PostgresSkinStore;
pub use upload::PostgresUploadStore;
