//! Fire-and-forget user notifications.
//!
//! The cart and checkout emit short human-readable messages ("Added Waffer to
//! your order") but never assume a particular display mechanism. Callers pick
//! a [`Notifier`] when wiring the system: the production default logs through
//! `tracing`, tests use [`RecordingNotifier`] to assert on what was emitted.

use std::sync::{Arc, Mutex};
use tracing::info;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Positive confirmation (item added, order placed).
    Success,
    /// Neutral state change (item removed, order cleared).
    Info,
    /// Rejected submission (checkout validation failures).
    Error,
}

/// A single user-facing message with its severity.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Sink for user-facing notifications.
///
/// Implementations must not block and must not fail: notifications are
/// fire-and-forget, and the emitting code never observes the outcome.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity);
    }
}

/// Production notifier: routes notifications into the tracing pipeline.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        info!(?severity, message, "Notification");
    }
}

/// Test notifier: records every notification for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything notified so far, in emission order.
    pub fn messages(&self) -> Vec<Notification> {
        self.log.lock().unwrap().clone()
    }

    /// Number of notifications emitted so far.
    pub fn count(&self) -> usize {
        self.log.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.log.lock().unwrap().push(Notification {
            message: message.to_string(),
            severity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_emission_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first", Severity::Success);
        notifier.notify("second", Severity::Info);

        let messages = notifier.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].message, "first");
        assert_eq!(messages[0].severity, Severity::Success);
        assert_eq!(messages[1].message, "second");
    }
}
