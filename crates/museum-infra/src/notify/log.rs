use museum_core::models::ReviewEvent;

use super::EventNotifier;

/// Notifier that only records events in the trace log. Used when no webhook is configured.
#[derive(Clone, Debug, Default)]
pub struct LogNotifier;

impl EventNotifier for LogNotifier {
    fn notify(&self, event: ReviewEvent) {
        tracing::info!(
            event_type = %event.kind,
            md5 = %event.md5,
            "Review event"
        );
    }
}
