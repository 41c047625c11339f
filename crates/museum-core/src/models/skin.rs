use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;

use sqlx::FromRow;

use crate::error::AppError;

/// Moderation state of a skin. Only the review mutations change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
    /// Flagged as not safe for work
    Nsfw,
}

impl Display for ReviewStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Rejected => write!(f, "rejected"),
            ReviewStatus::Nsfw => write!(f, "nsfw"),
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            "nsfw" => Ok(ReviewStatus::Nsfw),
            _ => Err(AppError::UnknownStatus {
                column: "review status",
                value: s.to_string(),
            }),
        }
    }
}

/// Raw row from the `skins` table.
#[derive(Debug, Clone, FromRow)]
pub struct SkinRow {
    pub md5: String,
    pub filename: String,
    pub nsfw: bool,
    pub review_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A skin archived in the museum, addressed by its md5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinRecord {
    pub md5: String,
    pub filename: String,
    pub nsfw: bool,
    pub review_status: ReviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<SkinRow> for SkinRecord {
    type Error = AppError;

    fn try_from(row: SkinRow) -> Result<Self, Self::Error> {
        Ok(SkinRecord {
            review_status: row.review_status.parse()?,
            md5: row.md5,
            filename: row.filename,
            nsfw: row.nsfw,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Skin as presented to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkinResponse {
    /// Md5 hash of the skin archive
    pub md5: String,
    /// Filename the skin was first uploaded with
    pub filename: String,
    pub nsfw: bool,
    pub review_status: ReviewStatus,
    /// Where the original archive can be downloaded
    pub download_url: String,
}

impl SkinResponse {
    pub fn from_record(record: SkinRecord, download_base_url: &str) -> Self {
        let download_url = format!(
            "{}/{}.wsz",
            download_base_url.trim_end_matches('/'),
            record.md5
        );
        Self {
            md5: record.md5,
            filename: record.filename,
            nsfw: record.nsfw,
            review_status: record.review_status,
            download_url,
        }
    }
}

/// Result of a review mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReviewMutationResponse {
    pub success: bool,
}
