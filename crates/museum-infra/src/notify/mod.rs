//! Review event notification
//!
//! Operations call [`EventNotifier::notify`] only after the store confirmed the
//! state change. Delivery happens out of band and never fails the caller.

mod log;
#[cfg(feature = "webhook")]
mod webhook;

pub use log::LogNotifier;
#[cfg(feature = "webhook")]
pub use webhook::{WebhookNotifier, WebhookNotifierConfig};

use museum_core::models::ReviewEvent;

/// Sink for review events consumed outside this service (e.g. social posting automation)
pub trait EventNotifier: Send + Sync {
    fn notify(&self, event: ReviewEvent);
}
