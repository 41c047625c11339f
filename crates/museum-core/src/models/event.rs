use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Kind of completed review transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEventKind {
    RejectedSkin,
    ApprovedSkin,
    MarkedSkinNsfw,
    ReviewRequested,
}

impl Display for ReviewEventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ReviewEventKind::RejectedSkin => write!(f, "REJECTED_SKIN"),
            ReviewEventKind::ApprovedSkin => write!(f, "APPROVED_SKIN"),
            ReviewEventKind::MarkedSkinNsfw => write!(f, "MARKED_SKIN_NSFW"),
            ReviewEventKind::ReviewRequested => write!(f, "REVIEW_REQUESTED"),
        }
    }
}

/// Immutable fact describing a review transition that the store has confirmed.
///
/// Serialized as `{"type": "...", "md5": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReviewEvent {
    #[serde(rename = "type")]
    pub kind: ReviewEventKind,
    pub md5: String,
}

impl ReviewEvent {
    pub fn new(kind: ReviewEventKind, md5: impl Into<String>) -> Self {
        Self {
            kind,
            md5: md5.into(),
        }
    }
}
