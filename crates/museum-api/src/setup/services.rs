//! Store and notifier initialization

use crate::state::{AppState, AuthState};
use anyhow::{Context, Result};
use museum_core::Config;
use museum_db::{PostgresSkinStore, PostgresUploadStore};
use museum_infra::{EventNotifier, LogNotifier, WebhookNotifier, WebhookNotifierConfig};
use sqlx::PgPool;
use std::sync::Arc;

/// Pick the review event sink: a webhook when one is configured, the trace log otherwise.
pub fn build_notifier(config: &Config) -> Result<Arc<dyn EventNotifier>> {
    match &config.notify_webhook_url {
        Some(url) => {
            let notifier = WebhookNotifier::new(WebhookNotifierConfig {
                url: url.clone(),
                signing_secret: config.notify_webhook_secret.clone(),
                timeout_seconds: config.notify_webhook_timeout_secs,
            })
            .context("Failed to initialize review webhook notifier")?;
            tracing::info!(
                signed = config.notify_webhook_secret.is_some(),
                timeout_secs = config.notify_webhook_timeout_secs,
                "Review events delivered by webhook"
            );
            Ok(Arc::new(notifier))
        }
        None => {
            tracing::info!("NOTIFY_WEBHOOK_URL not set, review events are only logged");
            Ok(Arc::new(LogNotifier))
        }
    }
}

/// Initialize stores and the notifier, returning the application state
pub fn initialize_services(config: &Config, pool: PgPool) -> Result<Arc<AppState>> {
    let notifier = build_notifier(config)?;

    if config.master_api_key.is_none() {
        tracing::warn!("MASTER_API_KEY not set, only JWT bearer tokens can authenticate");
    }

    Ok(Arc::new(AppState {
        skins: Arc::new(PostgresSkinStore::new(pool.clone())),
        uploads: Arc::new(PostgresUploadStore::new(pool)),
        notifier,
        auth: AuthState {
            master_api_key: config.master_api_key.clone(),
            jwt_secret: config.jwt_secret.clone(),
        },
        download_base_url: config.skin_download_base_url.clone(),
        max_upload_status_keys: config.max_upload_status_keys,
    }))
}
