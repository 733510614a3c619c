//! Re-authentication replay manager.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use dataall_core::result::AppResult;
use dataall_graphql::operation::OperationKind;
use dataall_graphql::request::GraphqlRequest;
use dataall_graphql::transport::{self, GraphqlTransport};

use super::outcome::{DiscardReason, ReplayOutcome};
use super::record::RequestInfo;
use super::store::RequestInfoStore;

/// Captures requests lost to session expiry and replays them once.
#[derive(Debug, Clone)]
pub struct ReplayService {
    slot: RequestInfoStore,
    transport: Arc<dyn GraphqlTransport>,
    ttl: Duration,
}

impl ReplayService {
    /// Create the manager.
    pub fn new(slot: RequestInfoStore, transport: Arc<dyn GraphqlTransport>, ttl: Duration) -> Self {
        Self {
            slot,
            transport,
            ttl,
        }
    }

    /// Replay window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Replay window in whole minutes, as shown to the user.
    pub fn ttl_minutes(&self) -> i64 {
        self.ttl.num_minutes()
    }

    /// The durable slot.
    pub fn slot(&self) -> &RequestInfoStore {
        &self.slot
    }

    /// Persist a record, overwriting any pending one.
    pub async fn store_request_info(&self, info: &RequestInfo) -> AppResult<()> {
        self.slot.store_request_info(info).await
    }

    /// The pending record, if one is present and readable.
    pub async fn restore_retry_request(&self) -> Option<RequestInfo> {
        self.slot.restore_retry_request().await
    }

    /// Capture a request that just failed with an auth-expiry error.
    pub async fn capture(
        &self,
        request: &GraphqlRequest,
        pathname: &str,
        username: &str,
    ) -> AppResult<RequestInfo> {
        let info = RequestInfo::capture(request.clone(), pathname, username);
        self.slot.store_request_info(&info).await?;
        info!(
            operation = %info.operation_name(),
            pathname,
            "Captured request for replay after re-authentication"
        );
        Ok(info)
    }

    /// Run after a session is successfully (re)initialized.
    pub async fn on_session_initialized(&self, username: &str) -> ReplayOutcome {
        self.on_session_initialized_at(username, Utc::now()).await
    }

    /// As [`on_session_initialized`](Self::on_session_initialized), at a
    /// given time.
    pub async fn on_session_initialized_at(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> ReplayOutcome {
        let Some(info) = self.slot.restore_retry_request().await else {
            if self.slot.is_occupied().await {
                self.clear().await;
            }
            return ReplayOutcome::Idle;
        };

        let operation_name = info.operation_name().to_string();

        if !info.is_fresh(now, self.ttl) {
            info!(
                operation = %operation_name,
                captured_at = %info.timestamp,
                ttl_minutes = self.ttl_minutes(),
                "Pending request expired, discarding"
            );
            self.clear().await;
            return ReplayOutcome::Discarded {
                operation_name,
                reason: DiscardReason::Expired,
            };
        }

        if info.username != username {
            info!(
                operation = %operation_name,
                "Pending request belongs to a different user, discarding"
            );
            self.clear().await;
            return ReplayOutcome::Discarded {
                operation_name,
                reason: DiscardReason::DifferentUser,
            };
        }

        let kind = info.request_info.kind().unwrap_or(OperationKind::Query);
        let result = transport::execute_raw(self.transport.as_ref(), &info.request_info).await;
        self.clear().await;

        match result {
            Ok(_) => {
                info!(operation = %operation_name, kind = ?kind, "Replayed request after re-authentication");
                ReplayOutcome::Succeeded {
                    operation_name,
                    kind,
                    pathname: info.pathname,
                }
            }
            Err(error) => {
                warn!(operation = %operation_name, error = %error, "Replay after re-authentication failed");
                ReplayOutcome::Failed {
                    operation_name,
                    error,
                }
            }
        }
    }

    async fn clear(&self) {
        if let Err(e) = self.slot.clear_request_info().await {
            warn!(key = %self.slot.key(), error = %e, "Failed to clear replay record");
        }
    }
}
