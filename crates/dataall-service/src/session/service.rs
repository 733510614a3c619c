//! Session initialization, re-authentication and logout.

use std::sync::Arc;

use tracing::{debug, info, warn};

use dataall_core::config::AuthPlatform;
use dataall_core::events::{ConsoleEvent, SessionEvent};
use dataall_core::result::AppResult;
use dataall_core::traits::{KeyValueStore, Notifier};
use dataall_entity::user::SessionUser;
use dataall_graphql::transport::GraphqlTransport;

use super::state::SessionState;
use crate::replay::{ReplayOutcome, ReplayService};

const DEFAULT_PATHNAME: &str = "/console";

/// Drives the session lifecycle and triggers replay on sign-in.
#[derive(Debug, Clone)]
pub struct SessionService {
    state: Arc<SessionState>,
    session_store: Arc<dyn KeyValueStore>,
    location_key: String,
    transport: Arc<dyn GraphqlTransport>,
    replay: Arc<ReplayService>,
    notifier: Arc<dyn Notifier>,
    platform: AuthPlatform,
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(
        state: Arc<SessionState>,
        session_store: Arc<dyn KeyValueStore>,
        location_key: impl Into<String>,
        transport: Arc<dyn GraphqlTransport>,
        replay: Arc<ReplayService>,
        notifier: Arc<dyn Notifier>,
        platform: AuthPlatform,
    ) -> Self {
        Self {
            state,
            session_store,
            location_key: location_key.into(),
            transport,
            replay,
            notifier,
            platform,
        }
    }

    /// Shared session state.
    pub fn state(&self) -> &Arc<SessionState> {
        &self.state
    }

    /// Authentication platform in use.
    pub fn platform(&self) -> &AuthPlatform {
        &self.platform
    }

    /// Sign a user in, then replay any request captured before the session
    /// expired. Replay notifications are dispatched before returning.
    pub async fn initialize(&self, user: SessionUser) -> AppResult<ReplayOutcome> {
        let username = user.name.clone();
        let token = user.id_token.clone().or_else(|| user.access_token.clone());

        self.transport.set_token(token).await;
        self.state.set_user(user).await;
        self.state.set_reauth_required(false);

        info!(username = %username, platform = %self.platform, "Session initialized");
        self.notifier
            .dispatch(ConsoleEvent::Session(SessionEvent::Initialized {
                username: username.clone(),
            }));

        let outcome = self.replay.on_session_initialized(&username).await;
        for event in outcome.events(self.replay.ttl_minutes()) {
            self.notifier.dispatch(event);
        }
        Ok(outcome)
    }

    /// Open the re-authentication prompt.
    pub fn require_reauth(&self, operation_name: Option<String>) {
        warn!(operation = ?operation_name, "Session expired, re-authentication required");
        self.state.set_reauth_required(true);
        self.notifier
            .dispatch(ConsoleEvent::Session(SessionEvent::ReauthRequired { operation_name }));
    }

    /// The user accepted the prompt: sign out locally so they can sign in
    /// again. The captured request stays pending.
    pub async fn reauth(&self) -> AppResult<()> {
        self.sign_out().await?;
        self.state.set_reauth_required(false);
        info!("Signed out for re-authentication");
        Ok(())
    }

    /// Sign out.
    pub async fn logout(&self) -> AppResult<()> {
        self.sign_out().await?;
        self.state.set_reauth_required(false);
        info!("Logged out");
        self.notifier
            .dispatch(ConsoleEvent::Session(SessionEvent::LoggedOut));
        Ok(())
    }

    /// Record the route the user is on.
    pub async fn navigate(&self, pathname: &str) -> AppResult<()> {
        debug!(pathname, "Navigated");
        self.session_store.set(&self.location_key, pathname).await
    }

    /// The route the user is on.
    pub async fn current_pathname(&self) -> String {
        match self.session_store.get(&self.location_key).await {
            Ok(Some(pathname)) => pathname,
            Ok(None) => DEFAULT_PATHNAME.to_string(),
            Err(e) => {
                warn!(error = %e, "Failed to read current location");
                DEFAULT_PATHNAME.to_string()
            }
        }
    }

    async fn sign_out(&self) -> AppResult<()> {
        self.transport.set_token(None).await;
        self.state.clear_user().await;
        self.session_store.remove(&self.location_key).await
    }
}
