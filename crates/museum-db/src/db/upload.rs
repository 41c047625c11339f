use async_trait::async_trait;
use museum_core::models::{SkinUploadRow, UploadKeys};
use museum_core::AppError;
use sqlx::{FromRow, PgPool};

use crate::store_traits::UploadStore;

/// Repository for skin upload attempts
#[derive(Clone)]
pub struct PostgresUploadStore {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct UploadStatusRow {
    id: i64,
    skin_md5: String,
    status: String,
}

impl TryFrom<UploadStatusRow> for SkinUploadRow {
    type Error = AppError;

    fn try_from(row: UploadStatusRow) -> Result<Self, Self::Error> {
        Ok(SkinUploadRow {
            id: row.id,
            skin_md5: row.skin_md5,
            status: row.status.parse()?,
        })
    }
}

impl PostgresUploadStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UploadStore for PostgresUploadStore {
    #[tracing::instrument(skip(self, keys), fields(
        db.system = "postgresql",
        db.table = "skin_uploads",
        db.operation = "select",
        key_column = keys.column(),
        key_count = keys.len()
    ))]
    async fn find_by_keys(&self, keys: &UploadKeys) -> Result<Vec<SkinUploadRow>, AppError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let rows = match keys {
            UploadKeys::Ids(ids) => {
                sqlx::query_as::<_, UploadStatusRow>(
                    r#"
                    SELECT id, skin_md5, status
                    FROM skin_uploads
                    WHERE id = ANY($1)
                    ORDER BY id DESC
                    "#,
                )
                .bind(ids)
                .fetch_all(&self.pool)
                .await?
            }
            UploadKeys::Md5s(md5s) => {
                sqlx::query_as::<_, UploadStatusRow>(
                    r#"
                    SELECT id, skin_md5, status
                    FROM skin_uploads
                    WHERE skin_md5 = ANY($1)
                    ORDER BY id DESC
                    "#,
                )
                .bind(md5s)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(SkinUploadRow::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use museum_core::models::SkinUploadStatus;

    #[test]
    fn test_row_conversion_keeps_raw_status() {
        let row = UploadStatusRow {
            id: 42,
            skin_md5: "5e4f10275dcb2a4e4ea2a4dc1f4a3b5d".to_string(),
            status: "ERRORED".to_string(),
        };
        let upload = SkinUploadRow::try_from(row).unwrap();
        assert_eq!(upload.id, 42);
        assert_eq!(upload.status, SkinUploadStatus::Errored);
    }

    #[test]
    fn test_row_conversion_rejects_unknown_status() {
        let row = UploadStatusRow {
            id: 1,
            skin_md5: "5e4f10275dcb2a4e4ea2a4dc1f4a3b5d".to_string(),
            status: "LOST".to_string(),
        };
        assert!(matches!(
            SkinUploadRow::try_from(row),
            Err(AppError::UnknownStatus { column: "upload status", .. })
        ));
    }
}
