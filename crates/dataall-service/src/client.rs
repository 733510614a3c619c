//! Re-auth-aware API client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{error, warn};

use dataall_core::result::AppResult;
use dataall_graphql::operation::Operation;
use dataall_graphql::transport::{self, GraphqlTransport};

use crate::replay::ReplayService;
use crate::session::SessionService;

/// Sends typed operations. A failure with an auth-expiry signal captures
/// the request for replay and opens the re-authentication prompt before
/// the `AuthExpired` error is returned.
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Arc<dyn GraphqlTransport>,
    replay: Arc<ReplayService>,
    session: Arc<SessionService>,
}

impl ApiClient {
    /// Creates a new API client.
    pub fn new(
        transport: Arc<dyn GraphqlTransport>,
        replay: Arc<ReplayService>,
        session: Arc<SessionService>,
    ) -> Self {
        Self {
            transport,
            replay,
            session,
        }
    }

    /// Session service the client reports expiry to.
    pub fn session(&self) -> &Arc<SessionService> {
        &self.session
    }

    /// Send an operation and decode its result.
    pub async fn execute<T: DeserializeOwned>(&self, operation: &Operation<T>) -> AppResult<T> {
        match transport::execute(self.transport.as_ref(), operation).await {
            Err(e) if e.is_auth_expired() => {
                self.capture(operation).await;
                Err(e)
            }
            other => other,
        }
    }

    async fn capture<T>(&self, operation: &Operation<T>) {
        let Some(username) = self.session.state().username().await else {
            warn!(
                operation = %operation.request.operation_name,
                "Session expired with no signed-in user, request not captured"
            );
            self.session
                .require_reauth(Some(operation.request.operation_name.clone()));
            return;
        };

        let pathname = self.session.current_pathname().await;
        if let Err(e) = self
            .replay
            .capture(&operation.request, &pathname, &username)
            .await
        {
            error!(
                operation = %operation.request.operation_name,
                error = %e,
                "Failed to capture request for replay"
            );
        }
        self.session
            .require_reauth(Some(operation.request.operation_name.clone()));
    }
}
