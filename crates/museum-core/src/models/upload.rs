use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use super::skin::SkinResponse;
use crate::error::AppError;

/// The current status of a pending upload.
///
/// Expect more values here over time as uploads become more transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkinUploadStatus {
    /// The user has requested a URL, but the skin has not yet been processed.
    UrlRequested,
    /// The user reported the upload finished, but it has not been processed yet.
    UploadReported,
    /// Processing failed. Usually transient; the skin is retried later.
    Errored,
    /// Processing failed through the server's fault and will be retried later.
    Delayed,
    /// The skin has been successfully added to the museum.
    Archived,
}

impl SkinUploadStatus {
    /// Status as exposed to clients: processing failures are always reported as delays.
    pub fn for_client(self) -> Self {
        match self {
            SkinUploadStatus::Errored => SkinUploadStatus::Delayed,
            other => other,
        }
    }
}

impl Display for SkinUploadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SkinUploadStatus::UrlRequested => write!(f, "URL_REQUESTED"),
            SkinUploadStatus::UploadReported => write!(f, "UPLOAD_REPORTED"),
            SkinUploadStatus::Errored => write!(f, "ERRORED"),
            SkinUploadStatus::Delayed => write!(f, "DELAYED"),
            SkinUploadStatus::Archived => write!(f, "ARCHIVED"),
        }
    }
}

impl FromStr for SkinUploadStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "URL_REQUESTED" => Ok(SkinUploadStatus::UrlRequested),
            "UPLOAD_REPORTED" => Ok(SkinUploadStatus::UploadReported),
            "ERRORED" => Ok(SkinUploadStatus::Errored),
            "DELAYED" => Ok(SkinUploadStatus::Delayed),
            "ARCHIVED" => Ok(SkinUploadStatus::Archived),
            _ => Err(AppError::UnknownStatus {
                column: "upload status",
                value: s.to_string(),
            }),
        }
    }
}

/// Projection of a `skin_uploads` row used for status lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinUploadRow {
    pub id: i64,
    pub skin_md5: String,
    pub status: SkinUploadStatus,
}

/// Which column an upload status lookup matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadKeys {
    /// Match `skin_uploads.id`
    Ids(Vec<i64>),
    /// Match `skin_uploads.skin_md5`
    Md5s(Vec<String>),
}

impl UploadKeys {
    pub fn column(&self) -> &'static str {
        match self {
            UploadKeys::Ids(_) => "id",
            UploadKeys::Md5s(_) => "skin_md5",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            UploadKeys::Ids(ids) => ids.len(),
            UploadKeys::Md5s(md5s) => md5s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Information about an attempt to upload a skin to the museum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkinUpload {
    pub id: String,
    pub status: SkinUploadStatus,
    /// Skin that was uploaded. Null until the skin has been fully processed.
    pub skin: Option<SkinResponse>,
    /// Md5 hash given when requesting the upload URL.
    pub upload_md5: String,
}

/// Request body for looking up upload statuses by upload id
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UploadStatusesRequest {
    #[validate(length(max = 1000, message = "At most 1000 ids may be requested at once"))]
    pub ids: Vec<String>,
}

/// Request body for looking up upload statuses by skin md5
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UploadStatusesByMd5Request {
    #[validate(length(max = 1000, message = "At most 1000 hashes may be requested at once"))]
    pub md5s: Vec<String>,
}
