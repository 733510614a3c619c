//! In-process session state.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use dataall_entity::user::SessionUser;

/// The signed-in user and whether a re-authentication prompt is open.
#[derive(Debug, Default)]
pub struct SessionState {
    user: RwLock<Option<SessionUser>>,
    reauth_required: AtomicBool,
}

impl SessionState {
    /// An empty, signed-out state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The signed-in user.
    pub async fn user(&self) -> Option<SessionUser> {
        self.user.read().await.clone()
    }

    /// Name of the signed-in user.
    pub async fn username(&self) -> Option<String> {
        self.user.read().await.as_ref().map(|u| u.name.clone())
    }

    /// Whether a user is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    pub(crate) async fn set_user(&self, user: SessionUser) {
        *self.user.write().await = Some(user);
    }

    pub(crate) async fn clear_user(&self) {
        *self.user.write().await = None;
    }

    /// Whether the re-authentication prompt is showing.
    pub fn is_reauth_required(&self) -> bool {
        self.reauth_required.load(Ordering::SeqCst)
    }

    pub(crate) fn set_reauth_required(&self, required: bool) {
        self.reauth_required.store(required, Ordering::SeqCst);
    }
}
