//! Upload status lookup handlers

use crate::context::RequestContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::upload_status;
use crate::state::AppState;
use axum::{extract::State, Json};
use museum_core::models::{SkinUpload, UploadStatusesByMd5Request, UploadStatusesRequest};
use museum_core::validation::{lookup_md5s, parse_upload_ids};
use museum_core::AppError;
use std::sync::Arc;

fn ensure_within_limit(requested: usize, limit: usize) -> Result<(), AppError> {
    if requested > limit {
        return Err(AppError::InvalidInput(format!(
            "At most {} keys may be requested at once, got {}",
            limit, requested
        )));
    }
    Ok(())
}

/// Get the status of a batch of uploads by upload id
#[utoipa::path(
    post,
    path = "/api/v0/uploads/statuses",
    tag = "uploads",
    request_body = UploadStatusesRequest,
    responses(
        (status = 200, description = "Matching uploads, most recent first", body = [SkinUpload]),
        (status = 400, description = "Invalid id or too many ids", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(state, ctx, request), fields(operation = "upload_statuses", key_count = request.ids.len()))]
pub async fn upload_statuses(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<UploadStatusesRequest>,
) -> Result<Json<Vec<SkinUpload>>, HttpAppError> {
    ensure_within_limit(request.ids.len(), state.max_upload_status_keys)?;
    let ids = parse_upload_ids(&request.ids)?;
    let uploads = upload_status::upload_statuses(ids, &ctx).await?;
    Ok(Json(uploads))
}

/// Get the status of a batch of uploads by skin md5
#[utoipa::path(
    post,
    path = "/api/v0/uploads/statuses-by-md5",
    tag = "uploads",
    request_body = UploadStatusesByMd5Request,
    responses(
        (status = 200, description = "Matching uploads, most recent first", body = [SkinUpload]),
        (status = 400, description = "Too many hashes", body = ErrorResponse),
    )
)]
#[deprecated(note = "use POST /api/v0/uploads/statuses with upload ids")]
#[tracing::instrument(skip(state, ctx, request), fields(operation = "upload_statuses_by_md5", key_count = request.md5s.len()))]
pub async fn upload_statuses_by_md5(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<UploadStatusesByMd5Request>,
) -> Result<Json<Vec<SkinUpload>>, HttpAppError> {
    ensure_within_limit(request.md5s.len(), state.max_upload_status_keys)?;
    let md5s = lookup_md5s(&request.md5s);
    if md5s.len() < request.md5s.len() {
        tracing::debug!(
            dropped = request.md5s.len() - md5s.len(),
            "Ignoring hashes that cannot name a skin"
        );
    }
    let uploads = upload_status::upload_statuses_by_md5(md5s, &ctx).await?;
    Ok(Json(uploads))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_within_limit() {
        assert!(ensure_within_limit(0, 5).is_ok());
        assert!(ensure_within_limit(5, 5).is_ok());
        assert!(matches!(
            ensure_within_limit(6, 5),
            Err(AppError::InvalidInput(_))
        ));
    }
}
