//! The persisted replay record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use dataall_graphql::request::GraphqlRequest;

/// A request captured after an auth-expiry failure.
///
/// Serialized as `{ requestInfo, pathname, timestamp, username }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    /// The outgoing request, document and variables included.
    pub request_info: GraphqlRequest,
    /// Route the user was on when the request was sent.
    pub pathname: String,
    /// Capture time.
    pub timestamp: DateTime<Utc>,
    /// Name of the user who sent the request.
    pub username: String,
}

impl RequestInfo {
    /// Capture a request at the current time.
    pub fn capture(
        request: GraphqlRequest,
        pathname: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self::capture_at(request, pathname, username, Utc::now())
    }

    /// Capture a request at a given time.
    pub fn capture_at(
        request: GraphqlRequest,
        pathname: impl Into<String>,
        username: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            request_info: request,
            pathname: pathname.into(),
            timestamp,
            username: username.into(),
        }
    }

    /// Operation name of the captured request.
    pub fn operation_name(&self) -> &str {
        &self.request_info.operation_name
    }

    /// Whether `now` is within `ttl` of the capture. The bound is inclusive;
    /// a capture time in the future counts as fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.timestamp <= ttl
    }
}
