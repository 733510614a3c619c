//! Notifier that only writes events to the log.

use tracing::{error, info, warn};

use dataall_core::events::{ConsoleEvent, NotificationLevel};
use dataall_core::traits::Notifier;

/// Used when nothing renders notifications (background replays, scripts).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn dispatch(&self, event: ConsoleEvent) {
        match event {
            ConsoleEvent::Notify(n) => match n.level {
                NotificationLevel::Error => error!(message = %n.message, "Notification"),
                NotificationLevel::Warning => warn!(message = %n.message, "Notification"),
                NotificationLevel::Success | NotificationLevel::Info => {
                    info!(level = %n.level, message = %n.message, "Notification")
                }
            },
            ConsoleEvent::Navigate { pathname } => info!(pathname = %pathname, "Navigate"),
            ConsoleEvent::Session(event) => info!(event = ?event, "Session event"),
        }
    }
}
