//! Test helpers for API unit and integration tests
//!
//! In-memory stores and a recording notifier that share one [`Journal`], so tests
//! can assert the exact order of lookups, mutations and emitted events without a database.

pub mod activity_log;
pub mod fixtures;
pub mod mock_stores;

pub use activity_log::capture_activity_log;
pub use fixtures::*;
pub use mock_stores::{Journal, JournalEntry, MockSkinStore, MockUploadStore, RecordingNotifier};

use crate::auth::Session;
use crate::context::RequestContext;
use crate::state::{AppState, AuthState};
use std::sync::Arc;

/// Wires the mocks into an [`AppState`] and hands out request contexts.
#[derive(Clone)]
pub struct TestHarness {
    pub skins: Arc<MockSkinStore>,
    pub uploads: Arc<MockUploadStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub journal: Journal,
}

impl TestHarness {
    pub fn new() -> Self {
        let journal = Journal::default();
        Self {
            skins: Arc::new(MockSkinStore::new(journal.clone())),
            uploads: Arc::new(MockUploadStore::new(journal.clone())),
            notifier: Arc::new(RecordingNotifier::new(journal.clone())),
            journal,
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            skins: self.skins.clone(),
            uploads: self.uploads.clone(),
            notifier: self.notifier.clone(),
            auth: AuthState {
                master_api_key: Some(TEST_MASTER_API_KEY.to_string()),
                jwt_secret: TEST_JWT_SECRET.to_string(),
            },
            download_base_url: TEST_DOWNLOAD_BASE_URL.to_string(),
            max_upload_status_keys: TEST_MAX_UPLOAD_STATUS_KEYS,
        }
    }

    pub fn context(&self, session: Session) -> RequestContext {
        RequestContext::new(session, &self.app_state())
    }

    pub fn authed_context(&self) -> RequestContext {
        self.context(Session::Authenticated {
            subject: "reviewer".to_string(),
        })
    }

    pub fn anonymous_context(&self) -> RequestContext {
        self.context(Session::Anonymous)
    }

    /// Route `RequestContext::log` messages into the journal until the guard drops.
    /// Only covers the current thread, which is all a `#[tokio::test]` uses.
    pub fn capture_activity_log(&self) -> tracing::subscriber::DefaultGuard {
        capture_activity_log(&self.journal)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
