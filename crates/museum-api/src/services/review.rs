//! Skin review operations
//!
//! Every operation logs its intent, then runs lookup, store mutation and event emission,
//! strictly in that order. Store errors propagate unchanged and nothing is retried.
//!
//! Existence handling differs per operation and is kept as is:
//! reject, approve and mark-nsfw treat an unknown md5 as `false`, while the public
//! review request fails with `SkinNotFound`.

use crate::context::RequestContext;
use crate::services::auth_gate::{require_authenticated, Operation};
use async_trait::async_trait;
use museum_core::models::{ReviewEvent, ReviewEventKind};
use museum_core::AppError;

/// State change applied by one of the gated review operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReviewAction {
    Reject,
    Approve,
    MarkNsfw,
}

impl ReviewAction {
    fn event_kind(self) -> ReviewEventKind {
        match self {
            ReviewAction::Reject => ReviewEventKind::RejectedSkin,
            ReviewAction::Approve => ReviewEventKind::ApprovedSkin,
            ReviewAction::MarkNsfw => ReviewEventKind::MarkedSkinNsfw,
        }
    }

    fn log_message(self, md5: &str) -> String {
        match self {
            ReviewAction::Reject => format!("Rejecting skin with hash \"{}\"", md5),
            ReviewAction::Approve => format!("Approving skin with hash \"{}\"", md5),
            ReviewAction::MarkNsfw => format!("Marking skin with hash \"{}\" NSFW", md5),
        }
    }
}

/// Log, look the skin up without asserting existence, then mutate and notify.
async fn review_if_exists(
    action: ReviewAction,
    md5: String,
    ctx: &RequestContext,
) -> Result<bool, AppError> {
    ctx.log(&action.log_message(&md5));
    if ctx.skins().fetch_by_md5(&md5).await?.is_none() {
        tracing::debug!(md5 = %md5, action = ?action, "Skin not found, nothing to review");
        return Ok(false);
    }

    match action {
        ReviewAction::Reject => ctx.skins().reject(&md5).await?,
        ReviewAction::Approve => ctx.skins().approve(&md5).await?,
        ReviewAction::MarkNsfw => ctx.skins().mark_nsfw(&md5).await?,
    }
    ctx.notify(ReviewEvent::new(action.event_kind(), md5));
    Ok(true)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RejectSkin;

#[async_trait]
impl Operation<String> for RejectSkin {
    type Output = bool;

    async fn call(&self, md5: String, ctx: &RequestContext) -> Result<bool, AppError> {
        review_if_exists(ReviewAction::Reject, md5, ctx).await
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ApproveSkin;

#[async_trait]
impl Operation<String> for ApproveSkin {
    type Output = bool;

    async fn call(&self, md5: String, ctx: &RequestContext) -> Result<bool, AppError> {
        review_if_exists(ReviewAction::Approve, md5, ctx).await
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkSkinNsfw;

#[async_trait]
impl Operation<String> for MarkSkinNsfw {
    type Output = bool;

    async fn call(&self, md5: String, ctx: &RequestContext) -> Result<bool, AppError> {
        review_if_exists(ReviewAction::MarkNsfw, md5, ctx).await
    }
}

/// Ask moderators to check a skin. Open to anonymous callers; changes no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestNsfwReview;

#[async_trait]
impl Operation<String> for RequestNsfwReview {
    type Output = bool;

    async fn call(&self, md5: String, ctx: &RequestContext) -> Result<bool, AppError> {
        ctx.log(&format!("Reporting skin with hash \"{}\"", md5));
        ctx.skins().fetch_by_md5_assert(&md5).await?;
        ctx.notify(ReviewEvent::new(ReviewEventKind::ReviewRequested, md5));
        Ok(true)
    }
}

pub async fn reject_skin(md5: String, ctx: &RequestContext) -> Result<bool, AppError> {
    require_authenticated(RejectSkin).call(md5, ctx).await
}

pub async fn approve_skin(md5: String, ctx: &RequestContext) -> Result<bool, AppError> {
    require_authenticated(ApproveSkin).call(md5, ctx).await
}

pub async fn mark_skin_nsfw(md5: String, ctx: &RequestContext) -> Result<bool, AppError> {
    require_authenticated(MarkSkinNsfw).call(md5, ctx).await
}

pub async fn request_nsfw_review_for_skin(
    md5: String,
    ctx: &RequestContext,
) -> Result<bool, AppError> {
    RequestNsfwReview.call(md5, ctx).await
}
