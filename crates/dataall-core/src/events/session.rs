//! Session lifecycle events.

use serde::{Deserialize, Serialize};

/// Session changes the UI layer reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A session was (re-)initialized for a user.
    Initialized {
        /// The authenticated username.
        username: String,
    },
    /// The session expired; show the re-authentication prompt.
    ReauthRequired {
        /// Operation captured for replay, if any.
        operation_name: Option<String>,
    },
    /// The user logged out.
    LoggedOut,
}
