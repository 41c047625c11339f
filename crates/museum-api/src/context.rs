//! Per-request context handed to every operation.
//!
//! Bundles the caller's session with the stores and notifier the operation may use,
//! so operations depend on an explicit parameter instead of global state.

use crate::auth::Session;
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use museum_core::models::ReviewEvent;
use museum_db::{SkinStore, UploadStore};
use museum_infra::{EventNotifier, RequestId};
use std::convert::Infallible;
use std::sync::Arc;

/// Target of the operational messages written through [`RequestContext::log`]
pub const ACTIVITY_LOG_TARGET: &str = "museum_api::activity";

#[derive(Clone)]
pub struct RequestContext {
    session: Session,
    request_id: Option<String>,
    skins: Arc<dyn SkinStore>,
    uploads: Arc<dyn UploadStore>,
    notifier: Arc<dyn EventNotifier>,
    download_base_url: String,
}

impl RequestContext {
    pub fn new(session: Session, state: &AppState) -> Self {
        Self {
            session,
            request_id: None,
            skins: state.skins.clone(),
            uploads: state.uploads.clone(),
            notifier: state.notifier.clone(),
            download_base_url: state.download_base_url.clone(),
        }
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Whether the caller presented a verified credential
    pub fn authed(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Record an operational message tagged with the request id and caller
    pub fn log(&self, message: &str) {
        tracing::info!(
            target: ACTIVITY_LOG_TARGET,
            request_id = ?self.request_id,
            subject = ?self.session.subject(),
            "{}",
            message
        );
    }

    /// Publish a review event. Call only after the store confirmed the change.
    pub fn notify(&self, event: ReviewEvent) {
        self.notifier.notify(event);
    }

    pub fn skins(&self) -> &dyn SkinStore {
        self.skins.as_ref()
    }

    pub fn uploads(&self) -> &dyn UploadStore {
        self.uploads.as_ref()
    }

    pub fn download_base_url(&self) -> &str {
        &self.download_base_url
    }
}

impl FromRequestParts<Arc<AppState>> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .unwrap_or_default();
        let request_id = parts.extensions.get::<RequestId>().map(|id| id.0.clone());

        Ok(RequestContext::new(session, state).with_request_id(request_id))
    }
}
