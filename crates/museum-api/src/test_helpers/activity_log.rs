//! Records `RequestContext::log` messages into a [`Journal`]

use super::mock_stores::{Journal, JournalEntry};
use crate::context::ACTIVITY_LOG_TARGET;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub struct ActivityLogLayer {
    journal: Journal,
}

impl ActivityLogLayer {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl<S: Subscriber> Layer<S> for ActivityLogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != ACTIVITY_LOG_TARGET {
            return;
        }
        let mut message = MessageField(None);
        event.record(&mut message);
        if let Some(message) = message.0 {
            self.journal.record(JournalEntry::Log(message));
        }
    }
}

struct MessageField(Option<String>);

impl Visit for MessageField {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{:?}", value));
        }
    }
}

/// Journal activity messages on the current thread until the guard drops.
pub fn capture_activity_log(journal: &Journal) -> DefaultGuard {
    let subscriber = tracing_subscriber::registry().with(ActivityLogLayer::new(journal.clone()));
    tracing::subscriber::set_default(subscriber)
}
