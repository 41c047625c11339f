//! Skin review handlers
//!
//! Thin HTTP adapters: normalize the md5 path segment, then run the matching
//! operation from [`crate::services::review`]. A segment that is not an md5 is
//! passed through and behaves like any unknown skin.

use crate::context::RequestContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::services::review;
use axum::{extract::Path, Json};
use museum_core::models::ReviewMutationResponse;
use museum_core::validation::normalize_md5;

#[utoipa::path(
    post,
    path = "/api/v0/skins/{md5}/reject",
    tag = "review",
    params(("md5" = String, Path, description = "Md5 hash of the skin")),
    responses(
        (status = 200, description = "Whether the skin existed and was rejected", body = ReviewMutationResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx), fields(operation = "reject_skin"))]
pub async fn reject_skin(
    ctx: RequestContext,
    Path(md5): Path<String>,
) -> Result<Json<ReviewMutationResponse>, HttpAppError> {
    let md5 = normalize_md5(&md5);
    let success = review::reject_skin(md5, &ctx).await?;
    Ok(Json(ReviewMutationResponse { success }))
}

#[utoipa::path(
    post,
    path = "/api/v0/skins/{md5}/approve",
    tag = "review",
    params(("md5" = String, Path, description = "Md5 hash of the skin")),
    responses(
        (status = 200, description = "Whether the skin existed and was approved", body = ReviewMutationResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx), fields(operation = "approve_skin"))]
pub async fn approve_skin(
    ctx: RequestContext,
    Path(md5): Path<String>,
) -> Result<Json<ReviewMutationResponse>, HttpAppError> {
    let md5 = normalize_md5(&md5);
    let success = review::approve_skin(md5, &ctx).await?;
    Ok(Json(ReviewMutationResponse { success }))
}

#[utoipa::path(
    post,
    path = "/api/v0/skins/{md5}/nsfw",
    tag = "review",
    params(("md5" = String, Path, description = "Md5 hash of the skin")),
    responses(
        (status = 200, description = "Whether the skin existed and was marked NSFW", body = ReviewMutationResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx), fields(operation = "mark_skin_nsfw"))]
pub async fn mark_skin_nsfw(
    ctx: RequestContext,
    Path(md5): Path<String>,
) -> Result<Json<ReviewMutationResponse>, HttpAppError> {
    let md5 = normalize_md5(&md5);
    let success = review::mark_skin_nsfw(md5, &ctx).await?;
    Ok(Json(ReviewMutationResponse { success }))
}

/// Request that a skin be reviewed for NSFW content. Does not require login.
#[utoipa::path(
    post,
    path = "/api/v0/skins/{md5}/nsfw-review-requests",
    tag = "review",
    params(("md5" = String, Path, description = "Md5 hash of the skin")),
    responses(
        (status = 200, description = "Review requested", body = ReviewMutationResponse),
        (status = 404, description = "Skin not found", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(ctx), fields(operation = "request_nsfw_review_for_skin"))]
pub async fn request_nsfw_review_for_skin(
    ctx: RequestContext,
    Path(md5): Path<String>,
) -> Result<Json<ReviewMutationResponse>, HttpAppError> {
    let md5 = normalize_md5(&md5);
    let success = review::request_nsfw_review_for_skin(md5, &ctx).await?;
    Ok(Json(ReviewMutationResponse { success }))
}
