//! Notification sinks for user-facing messages.
//!
//! The store reports the outcome of each mutation as a [`Notice`]. Sinks
//! decide how and when to show it; the store never reads anything back.

use std::sync::{Mutex, PoisonError};

use gamecart_core::{Notice, Severity};
use tracing::{error, info, warn};

/// Receiver of user-facing notices.
///
/// `notify` is called from inside the mutation that produced the notice.
/// When the store sits behind a [`StoreHandle`](crate::StoreHandle) its lock
/// is held for that call, so a sink must not call back into the handle.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Sink that writes notices to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Success | Severity::Info => {
                info!(severity = %notice.severity, "{}", notice.message);
            }
            Severity::Warning => warn!(severity = %notice.severity, "{}", notice.message),
            Severity::Error => error!(severity = %notice.severity, "{}", notice.message),
        }
    }
}

/// Sink that keeps every notice it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all notices received so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all notices received so far.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// The most recent notice, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.notify(Notice::success("one"));
        sink.notify(Notice::info("two"));

        let messages: Vec<String> = sink.notices().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, ["one", "two"]);
        assert_eq!(sink.last(), Some(Notice::info("two")));
    }

    #[test]
    fn test_take_drains() {
        let sink = RecordingSink::new();
        sink.notify(Notice::error("boom"));
        assert_eq!(sink.take().len(), 1);
        assert!(sink.notices().is_empty());
        assert_eq!(sink.last(), None);
    }

    #[test]
    fn test_tracing_sink_accepts_all_severities() {
        let sink = TracingSink;
        sink.notify(Notice::success("ok"));
        sink.notify(Notice::warning("careful"));
        sink.notify(Notice::error("bad"));
        sink.notify(Notice::info("fyi"));
    }
}
