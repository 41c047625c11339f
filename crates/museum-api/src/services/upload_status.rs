//! Batch upload status resolution
//!
//! One store query fetches every matching upload (highest id first); each row is then
//! resolved to its archived skin concurrently. The first failing resolution fails the
//! whole batch. Keys with no matching upload are dropped silently.

use crate::context::RequestContext;
use futures::future::try_join_all;
use museum_core::models::{SkinResponse, SkinUpload, SkinUploadRow, UploadKeys};
use museum_core::AppError;

/// Statuses of the uploads with the given ids
pub async fn upload_statuses(
    ids: Vec<i64>,
    ctx: &RequestContext,
) -> Result<Vec<SkinUpload>, AppError> {
    resolve_upload_statuses(UploadKeys::Ids(ids), ctx).await
}

/// Statuses of every upload of the given skin hashes.
///
/// Kept for older clients; prefer [`upload_statuses`].
pub async fn upload_statuses_by_md5(
    md5s: Vec<String>,
    ctx: &RequestContext,
) -> Result<Vec<SkinUpload>, AppError> {
    resolve_upload_statuses(UploadKeys::Md5s(md5s), ctx).await
}

#[tracing::instrument(skip(ctx, keys), fields(key_column = keys.column(), key_count = keys.len()))]
async fn resolve_upload_statuses(
    keys: UploadKeys,
    ctx: &RequestContext,
) -> Result<Vec<SkinUpload>, AppError> {
    let rows = ctx.uploads().find_by_keys(&keys).await?;
    tracing::debug!(matched = rows.len(), "Resolving upload statuses");

    try_join_all(rows.into_iter().map(|row| resolve_upload(row, ctx))).await
}

async fn resolve_upload(row: SkinUploadRow, ctx: &RequestContext) -> Result<SkinUpload, AppError> {
    let skin = ctx
        .skins()
        .fetch_by_md5(&row.skin_md5)
        .await?
        .map(|record| SkinResponse::from_record(record, ctx.download_base_url()));

    Ok(SkinUpload {
        id: row.id.to_string(),
        status: row.status.for_client(),
        skin,
        upload_md5: row.skin_md5,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{
        skin_record, upload_row, TestHarness, MD5_A, MD5_B, MD5_C, TEST_DOWNLOAD_BASE_URL,
    };
    use museum_core::models::{ReviewStatus, SkinUploadStatus};
    use std::time::Duration;

    #[tokio::test]
    async fn test_errored_archived_upload_is_reported_delayed_with_skin() {
        let harness = TestHarness::new();
        harness
            .skins
            .add_skin(skin_record(MD5_A, ReviewStatus::Approved));
        harness
            .uploads
            .add_upload(upload_row(7, MD5_A, SkinUploadStatus::Errored));

        let uploads = upload_statuses_by_md5(
            vec![MD5_A.to_string(), MD5_B.to_string()],
            &harness.anonymous_context(),
        )
        .await
        .unwrap();

        assert_eq!(uploads.len(), 1);
        let upload = &uploads[0];
        assert_eq!(upload.id, "7");
        assert_eq!(upload.status, SkinUploadStatus::Delayed);
        assert_eq!(upload.upload_md5, MD5_A);
        let skin = upload.skin.as_ref().unwrap();
        assert_eq!(skin.md5, MD5_A);
        assert_eq!(
            skin.download_url,
            format!("{}/{}.wsz", TEST_DOWNLOAD_BASE_URL, MD5_A)
        );
    }

    #[tokio::test]
    async fn test_other_statuses_pass_through() {
        let harness = TestHarness::new();
        let statuses = [
            SkinUploadStatus::UrlRequested,
            SkinUploadStatus::UploadReported,
            SkinUploadStatus::Delayed,
            SkinUploadStatus::Archived,
        ];
        for (i, status) in statuses.iter().enumerate() {
            harness
                .uploads
                .add_upload(upload_row(i as i64 + 1, MD5_C, *status));
        }

        let uploads = upload_statuses(vec![1, 2, 3, 4], &harness.anonymous_context())
            .await
            .unwrap();

        let mut returned: Vec<SkinUploadStatus> = uploads.iter().map(|u| u.status).collect();
        returned.reverse();
        assert_eq!(returned, statuses.to_vec());
        assert!(uploads.iter().all(|u| u.skin.is_none()));
    }

    #[tokio::test]
    async fn test_results_follow_store_order_not_input_order() {
        let harness = TestHarness::new();
        harness
            .uploads
            .add_upload(upload_row(3, MD5_A, SkinUploadStatus::UrlRequested));
        harness
            .uploads
            .add_upload(upload_row(10, MD5_B, SkinUploadStatus::UploadReported));
        harness
            .uploads
            .add_upload(upload_row(5, MD5_C, SkinUploadStatus::Archived));

        let uploads = upload_statuses(vec![3, 5, 10, 999], &harness.anonymous_context())
            .await
            .unwrap();

        let ids: Vec<&str> = uploads.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "5", "3"]);
    }

    #[tokio::test]
    async fn test_single_failed_resolution_fails_the_batch() {
        let harness = TestHarness::new();
        harness
            .uploads
            .add_upload(upload_row(1, MD5_A, SkinUploadStatus::Archived));
        harness
            .uploads
            .add_upload(upload_row(2, MD5_B, SkinUploadStatus::Archived));
        harness.skins.fail_lookup_for(MD5_B);

        let result = upload_statuses(vec![1, 2], &harness.anonymous_context()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_rows_resolve_concurrently() {
        let harness = TestHarness::new();
        for (id, md5) in [(1, MD5_A), (2, MD5_B), (3, MD5_C)] {
            harness
                .uploads
                .add_upload(upload_row(id, md5, SkinUploadStatus::Archived));
        }
        // Each lookup blocks until all three are in flight
        harness.skins.rendezvous_lookups(3);
        let ctx = harness.anonymous_context();

        let uploads = tokio::time::timeout(
            Duration::from_secs(5),
            upload_statuses(vec![1, 2, 3], &ctx),
        )
        .await
        .expect("lookups ran one after another")
        .unwrap();

        assert_eq!(uploads.len(), 3);
    }

    #[tokio::test]
    async fn test_no_matches_is_empty() {
        let harness = TestHarness::new();
        let uploads = upload_statuses(vec![42], &harness.anonymous_context())
            .await
            .unwrap();
        assert!(uploads.is_empty());
    }
}
