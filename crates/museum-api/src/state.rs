//! Application state shared by every handler.
//!
//! Stores and the notifier sit behind trait objects so tests can swap in
//! in-memory doubles without a database.

use museum_db::{SkinStore, UploadStore};
use museum_infra::EventNotifier;
use std::sync::Arc;

/// Credentials the identification middleware checks bearer tokens against.
#[derive(Clone)]
pub struct AuthState {
    pub master_api_key: Option<String>,
    pub jwt_secret: String,
}

#[derive(Clone)]
pub struct AppState {
    pub skins: Arc<dyn SkinStore>,
    pub uploads: Arc<dyn UploadStore>,
    pub notifier: Arc<dyn EventNotifier>,
    pub auth: AuthState,
    /// Base URL skin archives are served from (no trailing slash)
    pub download_base_url: String,
    /// Maximum number of keys accepted by one upload status lookup
    pub max_upload_status_keys: usize,
}
