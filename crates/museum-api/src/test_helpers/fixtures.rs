use chrono::Utc;
use museum_core::models::{ReviewStatus, SkinRecord, SkinUploadRow, SkinUploadStatus};

/// Test master API key
pub const TEST_MASTER_API_KEY: &str = "test-master-api-key-at-least-32-characters-long";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-that-is-at-least-32-chars";
pub const TEST_DOWNLOAD_BASE_URL: &str = "https://cdn.example.test/skins";
pub const TEST_MAX_UPLOAD_STATUS_KEYS: usize = 5;

pub const MD5_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const MD5_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
pub const MD5_C: &str = "cccccccccccccccccccccccccccccccc";
pub const MISSING_MD5: &str = "deadbeefdeadbeefdeadbeefdeadbeef";

pub fn skin_record(md5: &str, review_status: ReviewStatus) -> SkinRecord {
    let now = Utc::now();
    SkinRecord {
        md5: md5.to_string(),
        filename: format!("{}.wsz", &md5[..8]),
        nsfw: review_status == ReviewStatus::Nsfw,
        review_status,
        created_at: now,
        updated_at: now,
    }
}

pub fn upload_row(id: i64, md5: &str, status: SkinUploadStatus) -> SkinUploadRow {
    SkinUploadRow {
        id,
        skin_md5: md5.to_string(),
        status,
    }
}
