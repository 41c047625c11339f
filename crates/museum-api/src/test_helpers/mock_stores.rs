//! Mock store and notifier implementations for testing
//!
//! These mocks allow testing operations and handlers without database dependencies.

use async_trait::async_trait;
use museum_core::models::{ReviewEvent, ReviewStatus, SkinRecord, SkinUploadRow, UploadKeys};
use museum_core::AppError;
use museum_db::{SkinStore, UploadStore};
use museum_infra::EventNotifier;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// One observable side effect, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEntry {
    /// Message written through `RequestContext::log`
    Log(String),
    Lookup(String),
    Reject(String),
    Approve(String),
    MarkNsfw(String),
    UploadQuery(UploadKeys),
    Event(ReviewEvent),
}

/// Shared, ordered record of every call made against the mocks
#[derive(Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
}

impl Journal {
    pub fn record(&self, entry: JournalEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Entries that changed state (mutations and events); reads and logs excluded
    pub fn side_effects(&self) -> Vec<JournalEntry> {
        self.entries()
            .into_iter()
            .filter(|e| {
                !matches!(
                    e,
                    JournalEntry::Log(_) | JournalEntry::Lookup(_) | JournalEntry::UploadQuery(_)
                )
            })
            .collect()
    }
}

/// Mock skin store keyed by md5
#[derive(Clone)]
pub struct MockSkinStore {
    skins: Arc<Mutex<HashMap<String, SkinRecord>>>,
    failing_lookups: Arc<Mutex<HashSet<String>>>,
    fail_mutations: Arc<Mutex<bool>>,
    lookup_barrier: Arc<Mutex<Option<Arc<Barrier>>>>,
    journal: Journal,
}

impl MockSkinStore {
    pub fn new(journal: Journal) -> Self {
        Self {
            skins: Arc::new(Mutex::new(HashMap::new())),
            failing_lookups: Arc::new(Mutex::new(HashSet::new())),
            fail_mutations: Arc::new(Mutex::new(false)),
            lookup_barrier: Arc::new(Mutex::new(None)),
            journal,
        }
    }

    pub fn add_skin(&self, skin: SkinRecord) {
        self.skins.lock().unwrap().insert(skin.md5.clone(), skin);
    }

    pub fn get(&self, md5: &str) -> Option<SkinRecord> {
        self.skins.lock().unwrap().get(md5).cloned()
    }

    /// Make every lookup of `md5` fail with a database-style error
    pub fn fail_lookup_for(&self, md5: &str) {
        self.failing_lookups.lock().unwrap().insert(md5.to_string());
    }

    /// Hold every lookup until `parties` lookups are in flight at once
    pub fn rendezvous_lookups(&self, parties: usize) {
        *self.lookup_barrier.lock().unwrap() = Some(Arc::new(Barrier::new(parties)));
    }

    /// Make every mutation fail after the lookup succeeded
    pub fn fail_mutations(&self) {
        *self.fail_mutations.lock().unwrap() = true;
    }

    fn apply(&self, md5: &str, status: ReviewStatus) -> Result<(), AppError> {
        if *self.fail_mutations.lock().unwrap() {
            return Err(AppError::Internal("store unavailable".to_string()));
        }
        let mut skins = self.skins.lock().unwrap();
        let skin = skins
            .get_mut(md5)
            .ok_or_else(|| AppError::SkinNotFound(md5.to_string()))?;
        skin.review_status = status;
        if status == ReviewStatus::Nsfw {
            skin.nsfw = true;
        }
        Ok(())
    }
}

#[async_trait]
impl SkinStore for MockSkinStore {
    async fn fetch_by_md5(&self, md5: &str) -> Result<Option<SkinRecord>, AppError> {
        self.journal.record(JournalEntry::Lookup(md5.to_string()));
        let barrier = self.lookup_barrier.lock().unwrap().clone();
        if let Some(barrier) = barrier {
            barrier.wait().await;
        }
        if self.failing_lookups.lock().unwrap().contains(md5) {
            return Err(AppError::Internal(format!("lookup failed for {}", md5)));
        }
        Ok(self.get(md5))
    }

    async fn reject(&self, md5: &str) -> Result<(), AppError> {
        self.apply(md5, ReviewStatus::Rejected)?;
        self.journal.record(JournalEntry::Reject(md5.to_string()));
        Ok(())
    }

    async fn approve(&self, md5: &str) -> Result<(), AppError> {
        self.apply(md5, ReviewStatus::Approved)?;
        self.journal.record(JournalEntry::Approve(md5.to_string()));
        Ok(())
    }

    async fn mark_nsfw(&self, md5: &str) -> Result<(), AppError> {
        self.apply(md5, ReviewStatus::Nsfw)?;
        self.journal.record(JournalEntry::MarkNsfw(md5.to_string()));
        Ok(())
    }
}

/// Mock upload store holding rows in memory
#[derive(Clone)]
pub struct MockUploadStore {
    rows: Arc<Mutex<Vec<SkinUploadRow>>>,
    journal: Journal,
}

impl MockUploadStore {
    pub fn new(journal: Journal) -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            journal,
        }
    }

    pub fn add_upload(&self, row: SkinUploadRow) {
        self.rows.lock().unwrap().push(row);
    }
}

#[async_trait]
impl UploadStore for MockUploadStore {
    async fn find_by_keys(&self, keys: &UploadKeys) -> Result<Vec<SkinUploadRow>, AppError> {
        self.journal.record(JournalEntry::UploadQuery(keys.clone()));
        let mut matched: Vec<SkinUploadRow> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| match keys {
                UploadKeys::Ids(ids) => ids.contains(&row.id),
                UploadKeys::Md5s(md5s) => md5s.contains(&row.skin_md5),
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(matched)
    }
}

/// Notifier that keeps every event it receives
#[derive(Clone)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<ReviewEvent>>>,
    journal: Journal,
}

impl RecordingNotifier {
    pub fn new(journal: Journal) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            journal,
        }
    }

    pub fn events(&self) -> Vec<ReviewEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventNotifier for RecordingNotifier {
    fn notify(&self, event: ReviewEvent) {
        self.journal.record(JournalEntry::Event(event.clone()));
        self.events.lock().unwrap().push(event);
    }
}
