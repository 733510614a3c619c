//! Events handed to the UI layer through the [`Notifier`](crate::traits::Notifier).

pub mod notification;
pub mod session;

use serde::{Deserialize, Serialize};

pub use notification::{Notification, NotificationLevel};
pub use session::SessionEvent;

/// Union of everything a service may ask the UI layer to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "event", rename_all = "snake_case")]
pub enum ConsoleEvent {
    /// Show a transient notification.
    Notify(Notification),
    /// Navigate back to a route.
    Navigate {
        /// The route path to open.
        pathname: String,
    },
    /// A session lifecycle change.
    Session(SessionEvent),
}

impl ConsoleEvent {
    /// Shorthand for a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Notify(Notification::new(NotificationLevel::Success, message))
    }

    /// Shorthand for an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Notify(Notification::new(NotificationLevel::Error, message))
    }
}
