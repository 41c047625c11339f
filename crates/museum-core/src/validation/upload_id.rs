//! Upload id parsing
//!
//! Upload ids are exposed to clients as opaque strings but stored as
//! positive integers.

use crate::error::AppError;

/// Parse client supplied upload ids, failing on the first one that is not a positive integer.
pub fn parse_upload_ids(raw: &[String]) -> Result<Vec<i64>, AppError> {
    raw.iter()
        .map(|id| {
            id.trim()
                .parse::<i64>()
                .ok()
                .filter(|parsed| *parsed > 0)
                .ok_or_else(|| AppError::InvalidInput(format!("'{}' is not a valid upload id", id)))
        })
        .collect()
}
