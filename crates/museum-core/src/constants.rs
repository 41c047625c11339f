//! Shared constants

/// Length of a skin content hash (hex encoded md5).
pub const MD5_HEX_LENGTH: usize = 32;

/// Default upper bound on keys accepted by one upload status lookup.
pub const DEFAULT_MAX_UPLOAD_STATUS_KEYS: usize = 100;

/// Highest configurable key limit. Matches the `validator` rule on the batch request bodies.
pub const UPLOAD_STATUS_KEYS_CEILING: usize = 1000;

/// Message returned when a gated operation is called without credentials.
pub const UNAUTHENTICATED_MESSAGE: &str = "You must be logged in to read this field.";

/// Subject recorded for requests authenticated with the master API key.
pub const MASTER_KEY_SUBJECT: &str = "service-admin";
