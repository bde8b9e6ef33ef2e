//! Notification sink implementations.
//!
//! `ChannelNotificationSink` streams notifications to a front end over a
//! tokio channel; `TracingNotificationSink` writes them to the log.

use hookline_core::notification::{Notification, NotificationKind, NotificationSink};
use tokio::sync::mpsc;

/// Sends notifications to a channel consumed by the front end.
pub struct ChannelNotificationSink {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotificationSink {
    /// Create a new sink with the given channel sender
    pub fn new(sender: mpsc::UnboundedSender<Notification>) -> Self {
        Self { sender }
    }

    /// Creates a sink together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl NotificationSink for ChannelNotificationSink {
    fn notify(&self, notification: Notification) {
        // Non-blocking send - if the receiver is dropped, we just skip
        if self.sender.send(notification).is_err() {
            tracing::debug!("[Notify] Receiver dropped, notification discarded");
        }
    }
}

/// Logs notifications instead of displaying them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Info => tracing::info!(
                title = %notification.title,
                "[Notify] {}",
                notification.message
            ),
            NotificationKind::Error => tracing::warn!(
                title = %notification.title,
                "[Notify] {}",
                notification.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_forwards_in_order() {
        let (sink, mut receiver) = ChannelNotificationSink::channel();

        sink.notify(Notification::error("Error", "Please enter a topic"));
        sink.notify(Notification::info("Saved", "Done"));

        let first = receiver.try_recv().unwrap();
        assert_eq!(first.kind, NotificationKind::Error);
        assert_eq!(first.message, "Please enter a topic");
        assert_eq!(receiver.try_recv().unwrap().kind, NotificationKind::Info);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (sink, receiver) = ChannelNotificationSink::channel();
        drop(receiver);

        sink.notify(Notification::error("Error", "ignored"));
    }

    #[test]
    fn test_tracing_sink_accepts_both_kinds() {
        let sink = TracingNotificationSink;
        sink.notify(Notification::info("Info", "hello"));
        sink.notify(Notification::error("Error", "boom"));
    }
}
