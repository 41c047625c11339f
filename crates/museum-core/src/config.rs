//! Configuration module
//!
//! This module provides the configuration structure for the API server: database,
//! authentication, CORS, review-event delivery and upload status lookup limits.

use std::env;

use crate::constants::{DEFAULT_MAX_UPLOAD_STATUS_KEYS, UPLOAD_STATUS_KEYS_CEILING};

// Common constants
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const NOTIFY_WEBHOOK_TIMEOUT_SECS: u64 = 10;
const MIN_SECRET_LENGTH: usize = 32;

/// Application configuration, loaded from the environment (and `.env` when present).
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub log_format: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub jwt_secret: String,
    pub master_api_key: Option<String>,
    /// Base URL skins are downloadable from; the md5 and `.wsz` are appended.
    pub skin_download_base_url: String,
    // Review event delivery
    pub notify_webhook_url: Option<String>,
    pub notify_webhook_secret: Option<String>,
    pub notify_webhook_timeout_secs: u64,
    pub max_upload_status_keys: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "text".to_string())
                .to_lowercase(),
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set for authentication"))?,
            master_api_key: env::var("MASTER_API_KEY").ok().filter(|s| !s.is_empty()),
            skin_download_base_url: env::var("SKIN_DOWNLOAD_BASE_URL")
                .unwrap_or_else(|_| "https://cdn.webampskins.org/skins".to_string())
                .trim_end_matches('/')
                .to_string(),
            notify_webhook_url: env::var("NOTIFY_WEBHOOK_URL").ok().filter(|s| !s.is_empty()),
            notify_webhook_secret: env::var("NOTIFY_WEBHOOK_SECRET")
                .ok()
                .filter(|s| !s.is_empty()),
            notify_webhook_timeout_secs: env::var("NOTIFY_WEBHOOK_TIMEOUT_SECS")
                .unwrap_or_else(|_| NOTIFY_WEBHOOK_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(NOTIFY_WEBHOOK_TIMEOUT_SECS),
            max_upload_status_keys: env::var("MAX_UPLOAD_STATUS_KEYS")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_STATUS_KEYS.to_string())
                .parse()
                .unwrap_or(DEFAULT_MAX_UPLOAD_STATUS_KEYS),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < MIN_SECRET_LENGTH {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be at least 32 characters long"
            ));
        }

        if let Some(ref key) = self.master_api_key {
            if key.len() < MIN_SECRET_LENGTH {
                return Err(anyhow::anyhow!(
                    "MASTER_API_KEY must be at least 32 characters long"
                ));
            }
        }

        if !(self.database_url.starts_with("postgresql://")
            || self.database_url.starts_with("postgres://"))
        {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if let Some(ref url) = self.notify_webhook_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(anyhow::anyhow!(
                    "NOTIFY_WEBHOOK_URL must be an http(s) URL"
                ));
            }
        }

        if self.max_upload_status_keys == 0
            || self.max_upload_status_keys > UPLOAD_STATUS_KEYS_CEILING
        {
            return Err(anyhow::anyhow!(
                "MAX_UPLOAD_STATUS_KEYS must be between 1 and {}",
                UPLOAD_STATUS_KEYS_CEILING
            ));
        }

        Ok(())
    }
}
