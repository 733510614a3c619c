//! Channel-backed notifier feeding the UI layer.

use tokio::sync::mpsc;
use tracing::debug;

use dataall_core::events::ConsoleEvent;
use dataall_core::traits::Notifier;

/// Forwards every event to an unbounded channel the UI layer drains.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<ConsoleEvent>,
}

impl ChannelNotifier {
    /// Create the notifier and the receiving end.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ConsoleEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn dispatch(&self, event: ConsoleEvent) {
        if self.sender.send(event).is_err() {
            debug!("Notification receiver dropped, event discarded");
        }
    }
}

/// Take every event currently queued.
pub fn drain(receiver: &mut mpsc::UnboundedReceiver<ConsoleEvent>) -> Vec<ConsoleEvent> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
