use async_trait::async_trait;
use museum_core::models::{ReviewStatus, SkinRecord, SkinRow};
use museum_core::validation::is_valid_md5;
use museum_core::AppError;
use sqlx::PgPool;

use crate::store_traits::SkinStore;

/// Repository for skins and their review history
#[derive(Clone)]
pub struct PostgresSkinStore {
    pool: PgPool,
}

impl PostgresSkinStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Set the review status and append to `skin_reviews` in one transaction.
    async fn record_review(&self, md5: &str, status: ReviewStatus) -> Result<(), AppError> {
        let review = status.to_string();
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE skins
            SET review_status = $2,
                nsfw = CASE WHEN $2 = 'nsfw' THEN TRUE ELSE nsfw END,
                updated_at = NOW()
            WHERE md5 = $1
            "#,
        )
        .bind(md5)
        .bind(&review)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Err(AppError::SkinNotFound(md5.to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO skin_reviews (skin_md5, review)
            VALUES ($1, $2)
            "#,
        )
        .bind(md5)
        .bind(&review)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(md5 = %md5, review = %review, "Recorded skin review");
        Ok(())
    }
}

#[async_trait]
impl SkinStore for PostgresSkinStore {
    #[tracing::instrument(skip(self), fields(
        db.system = "postgresql",
        db.table = "skins",
        db.operation = "select"
    ))]
    async fn fetch_by_md5(&self, md5: &str) -> Result<Option<SkinRecord>, AppError> {
        // The md5 column only holds well-formed hashes
        if !is_valid_md5(md5) {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, SkinRow>(
            r#"
            SELECT md5, filename, nsfw, review_status, created_at, updated_at
            FROM skins
            WHERE md5 = $1
            "#,
        )
        .bind(md5)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SkinRecord::try_from).transpose()
    }

    #[tracing::instrument(skip(self), fields(db.system = "postgresql", db.table = "skins", db.operation = "update"))]
    async fn reject(&self, md5: &str) -> Result<(), AppError> {
        self.record_review(md5, ReviewStatus::Rejected).await
    }

    #[tracing::instrument(skip(self), fields(db.system = "postgresql", db.table = "skins", db.operation = "update"))]
    async fn approve(&self, md5: &str) -> Result<(), AppError> {
        self.record_review(md5, ReviewStatus::Approved).await
    }

    #[tracing::instrument(skip(self), fields(db.system = "postgresql", db.table = "skins", db.operation = "update"))]
    async fn mark_nsfw(&self, md5: &str) -> Result<(), AppError> {
        self.record_review(md5, ReviewStatus::Nsfw).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    #[tokio::test]
    async fn test_malformed_md5_names_no_skin_without_querying() {
        // Nothing listens here; any query would fail to connect
        let pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(100))
            .connect_lazy("postgres://museum@127.0.0.1:1/museum")
            .unwrap();
        let store = PostgresSkinStore::new(pool);

        assert!(store.fetch_by_md5("deadbeef").await.unwrap().is_none());
        assert!(store.fetch_by_md5("").await.unwrap().is_none());
    }
}
