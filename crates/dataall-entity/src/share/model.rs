//! Share request entity model.

use serde::{Deserialize, Serialize};

use dataall_core::types::{Page, ShareUri};

use super::item::ShareItem;
use super::principal::{DatasetRef, Principal};
use super::status::{ShareObjectStatus, UserRole};

/// A request by one principal to access sub-resources of a dataset owned
/// by another team, as returned by `getShareObject`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareObject {
    /// Server-assigned identifier.
    pub share_uri: ShareUri,
    /// Creation timestamp, as the backend formats it.
    #[serde(default)]
    pub created: Option<String>,
    /// Username of the requester.
    pub owner: String,
    /// Lifecycle status.
    pub status: ShareObjectStatus,
    /// Why the requester needs access.
    #[serde(default)]
    pub request_purpose: Option<String>,
    /// Why the approver rejected the request.
    #[serde(default)]
    pub reject_purpose: Option<String>,
    /// Role of the current viewer on this request.
    pub user_role_for_share_object: UserRole,
    /// Whether the viewer may read provisioning logs.
    #[serde(default)]
    pub can_view_logs: Option<bool>,
    /// Requesting identity.
    pub principal: Principal,
    /// Target dataset.
    pub dataset: DatasetRef,
    /// Items page, shaped by the filter sent with the query.
    #[serde(default)]
    pub items: Page<ShareItem>,
}

impl ShareObject {
    /// Number of items attached to the request, across all pages.
    pub fn item_count(&self) -> u64 {
        self.items.count.max(self.items.nodes.len() as u64)
    }
}

/// Per-request item counters shown in inbox/outbox listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareStatistics {
    /// Items granting access.
    #[serde(default)]
    pub shared_items: u64,
    /// Items revoked.
    #[serde(default)]
    pub revoked_items: u64,
    /// Items in a failure state.
    #[serde(default)]
    pub failed_items: u64,
    /// Items waiting for approval.
    #[serde(default)]
    pub pending_items: u64,
}

/// A share request as listed in the inbox or outbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSummary {
    /// Server-assigned identifier.
    pub share_uri: ShareUri,
    /// Username of the requester.
    pub owner: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<String>,
    /// Lifecycle status.
    pub status: ShareObjectStatus,
    /// Role of the current viewer.
    pub user_role_for_share_object: UserRole,
    /// Requesting identity.
    pub principal: Principal,
    /// Target dataset.
    pub dataset: DatasetRef,
    /// Item counters.
    #[serde(default)]
    pub statistics: ShareStatistics,
}
