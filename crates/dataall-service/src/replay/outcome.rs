//! Terminal outcomes of a replay attempt and the events they raise.

use dataall_core::error::AppError;
use dataall_core::events::ConsoleEvent;
use dataall_graphql::operation::OperationKind;

/// Why a pending record was dropped without being replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Captured longer ago than the TTL.
    Expired,
    /// A different user signed in.
    DifferentUser,
}

/// Result of `on_session_initialized`.
#[derive(Debug, Clone)]
pub enum ReplayOutcome {
    /// No record was pending.
    Idle,
    /// The replayed request succeeded.
    Succeeded {
        /// Replayed operation.
        operation_name: String,
        /// Declared kind of the document.
        kind: OperationKind,
        /// Route to return to.
        pathname: String,
    },
    /// The replayed request failed.
    Failed {
        /// Replayed operation.
        operation_name: String,
        /// Classified failure.
        error: AppError,
    },
    /// The record was dropped.
    Discarded {
        /// Captured operation.
        operation_name: String,
        /// Why.
        reason: DiscardReason,
    },
}

impl ReplayOutcome {
    /// Whether the request was sent.
    pub fn was_replayed(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    /// Events for the UI layer. A successful query also navigates back to
    /// the route it was captured on.
    pub fn events(&self, ttl_minutes: i64) -> Vec<ConsoleEvent> {
        match self {
            Self::Idle => Vec::new(),
            Self::Succeeded {
                operation_name,
                kind,
                pathname,
            } => {
                let mut events = vec![ConsoleEvent::success(format!(
                    "ReAuth Retry Operation Successful {operation_name}"
                ))];
                if *kind == OperationKind::Query {
                    events.push(ConsoleEvent::Navigate {
                        pathname: pathname.clone(),
                    });
                }
                events
            }
            Self::Failed {
                operation_name,
                error,
            } => vec![ConsoleEvent::error(format!(
                "ReAuth Retry Operation Failed {operation_name} with error {}",
                error.message
            ))],
            Self::Discarded {
                operation_name,
                reason: DiscardReason::Expired,
            } => vec![ConsoleEvent::error(format!(
                "ReAuth Retry Operation Failed {operation_name} - waited over {ttl_minutes} minutes"
            ))],
            Self::Discarded {
                operation_name,
                reason: DiscardReason::DifferentUser,
            } => vec![ConsoleEvent::error(format!(
                "ReAuth Retry Operation Failed {operation_name} - signed in as a different user"
            ))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_only_for_queries() {
        let query = ReplayOutcome::Succeeded {
            operation_name: "getShareObject".to_string(),
            kind: OperationKind::Query,
            pathname: "/console/shares/share-1".to_string(),
        };
        let events = query.events(5);
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            ConsoleEvent::Navigate {
                pathname: "/console/shares/share-1".to_string()
            }
        );

        let mutation = ReplayOutcome::Succeeded {
            operation_name: "approveShareObject".to_string(),
            kind: OperationKind::Mutation,
            pathname: "/console/shares/share-1".to_string(),
        };
        assert_eq!(mutation.events(5).len(), 1);
    }

    #[test]
    fn test_failure_messages() {
        let failed = ReplayOutcome::Failed {
            operation_name: "deleteShareObject".to_string(),
            error: AppError::conflict("There are shared items in this request."),
        };
        match &failed.events(5)[0] {
            ConsoleEvent::Notify(n) => {
                assert!(n.is_error());
                assert_eq!(
                    n.message,
                    "ReAuth Retry Operation Failed deleteShareObject with error There are shared items in this request."
                );
            }
            other => panic!("unexpected event {other:?}"),
        }

        let expired = ReplayOutcome::Discarded {
            operation_name: "submitShareObject".to_string(),
            reason: DiscardReason::Expired,
        };
        match &expired.events(5)[0] {
            ConsoleEvent::Notify(n) => assert_eq!(
                n.message,
                "ReAuth Retry Operation Failed submitShareObject - waited over 5 minutes"
            ),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(!expired.was_replayed());
        assert!(ReplayOutcome::Idle.events(5).is_empty());
    }
}
