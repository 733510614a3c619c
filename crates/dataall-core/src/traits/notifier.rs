//! Dispatcher trait for user-visible console events.

use crate::events::ConsoleEvent;

/// Receives toasts, navigation requests and session prompts.
///
/// Services never render anything themselves; they hand events to the
/// notifier carried in the application context and the UI layer decides
/// how to show them.
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Dispatch one event. Must not block.
    fn dispatch(&self, event: ConsoleEvent);
}
