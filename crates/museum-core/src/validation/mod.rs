//! Validation modules

pub mod md5;
pub mod upload_id;

pub use md5::{is_valid_md5, lookup_md5s, normalize_md5};
pub use upload_id::parse_upload_ids;
