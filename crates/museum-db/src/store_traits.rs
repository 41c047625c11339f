//! Store trait abstractions
//!
//! These traits define the interface the API layer needs from persistence,
//! allowing in-memory doubles in tests without database dependencies.
//! Each store owns the atomicity of its own mutations.

use async_trait::async_trait;
use museum_core::models::{SkinRecord, SkinUploadRow, UploadKeys};
use museum_core::AppError;

/// Skin records and their review state
#[async_trait]
pub trait SkinStore: Send + Sync {
    /// Look up a skin by md5. Absence is not an error.
    async fn fetch_by_md5(&self, md5: &str) -> Result<Option<SkinRecord>, AppError>;

    /// Look up a skin by md5, failing with `SkinNotFound` when it does not exist.
    async fn fetch_by_md5_assert(&self, md5: &str) -> Result<SkinRecord, AppError> {
        self.fetch_by_md5(md5)
            .await?
            .ok_or_else(|| AppError::SkinNotFound(md5.to_string()))
    }

    /// Mark the skin as rejected
    async fn reject(&self, md5: &str) -> Result<(), AppError>;

    /// Mark the skin as approved
    async fn approve(&self, md5: &str) -> Result<(), AppError>;

    /// Flag the skin as not safe for work
    async fn mark_nsfw(&self, md5: &str) -> Result<(), AppError>;

    /// Cheap connectivity check used by the readiness probe
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Upload attempts
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// All uploads whose key column matches one of `keys`, most recent (highest id) first.
    async fn find_by_keys(&self, keys: &UploadKeys) -> Result<Vec<SkinUploadRow>, AppError>;
}
