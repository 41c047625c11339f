//! Museum Infrastructure Library
//!
//! This crate provides shared infrastructure components used by the museum services:
//! - Middleware (request ID)
//! - Telemetry initialization
//! - Review event notification (webhook delivery, structured log)

#[cfg(feature = "middleware")]
pub mod middleware;

#[cfg(feature = "observability-basic")]
pub mod telemetry;

pub mod notify;

// Re-export commonly used types
#[cfg(feature = "middleware")]
pub use middleware::{request_id_middleware, RequestId};

#[cfg(feature = "observability-basic")]
pub use telemetry::{init_telemetry, shutdown_telemetry};

pub use notify::{EventNotifier, LogNotifier};

#[cfg(feature = "webhook")]
pub use notify::{WebhookNotifier, WebhookNotifierConfig};
