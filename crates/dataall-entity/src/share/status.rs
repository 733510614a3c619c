//! Share status, item status, health status and viewer-role enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a share request. This is a closed set: any other string from
/// the backend fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareObjectStatus {
    /// Created by a requester, never submitted.
    Draft,
    /// Waiting for an approver.
    Submitted,
    /// Approved; the backend is provisioning the items.
    Approved,
    /// Rejected by an approver.
    Rejected,
    /// The backend finished processing the approved items.
    Processed,
}

impl ShareObjectStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [ShareObjectStatus; 5] = [
        Self::Draft,
        Self::Submitted,
        Self::Approved,
        Self::Rejected,
        Self::Processed,
    ];

    /// Return the status as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Processed => "Processed",
        }
    }
}

impl fmt::Display for ShareObjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a single share item, covering both the share path and the
/// revoke path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareItemStatus {
    /// Attached, waiting for the request to be approved.
    PendingApproval,
    /// Approved, waiting for provisioning.
    #[serde(rename = "Share_Approved")]
    ShareApproved,
    /// The request was rejected.
    #[serde(rename = "Share_Rejected")]
    ShareRejected,
    /// Provisioning in progress.
    #[serde(rename = "Share_In_Progress")]
    ShareInProgress,
    /// Provisioned.
    #[serde(rename = "Share_Succeeded")]
    ShareSucceeded,
    /// Provisioning failed.
    #[serde(rename = "Share_Failed")]
    ShareFailed,
    /// Revocation requested.
    #[serde(rename = "Revoke_Approved")]
    RevokeApproved,
    /// Revocation in progress.
    #[serde(rename = "Revoke_In_Progress")]
    RevokeInProgress,
    /// Revoked.
    #[serde(rename = "Revoke_Succeeded")]
    RevokeSucceeded,
    /// Revocation failed; access may still be granted.
    #[serde(rename = "Revoke_Failed")]
    RevokeFailed,
}

impl ShareItemStatus {
    /// All item statuses.
    pub const ALL: [ShareItemStatus; 10] = [
        Self::PendingApproval,
        Self::ShareApproved,
        Self::ShareRejected,
        Self::ShareInProgress,
        Self::ShareSucceeded,
        Self::ShareFailed,
        Self::RevokeApproved,
        Self::RevokeInProgress,
        Self::RevokeSucceeded,
        Self::RevokeFailed,
    ];

    /// Access is (or may still be) granted; the item must be revoked before
    /// it can be removed.
    pub fn is_shared(&self) -> bool {
        matches!(self, Self::ShareSucceeded | Self::RevokeFailed)
    }

    /// A share or revoke operation is queued or running.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            Self::ShareApproved
                | Self::RevokeApproved
                | Self::ShareInProgress
                | Self::RevokeInProgress
        )
    }

    /// The requester may detach the item from the request.
    pub fn is_removable(&self) -> bool {
        !self.is_shared() && !self.is_in_progress()
    }

    /// The item ended in a failure state.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::ShareFailed | Self::RevokeFailed)
    }

    /// Return the status as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingApproval => "PendingApproval",
            Self::ShareApproved => "Share_Approved",
            Self::ShareRejected => "Share_Rejected",
            Self::ShareInProgress => "Share_In_Progress",
            Self::ShareSucceeded => "Share_Succeeded",
            Self::ShareFailed => "Share_Failed",
            Self::RevokeApproved => "Revoke_Approved",
            Self::RevokeInProgress => "Revoke_In_Progress",
            Self::RevokeSucceeded => "Revoke_Succeeded",
            Self::RevokeFailed => "Revoke_Failed",
        }
    }
}

impl fmt::Display for ShareItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Backend-computed health of an already shared item. Only displayed;
/// refreshed by verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HealthStatus {
    /// The last verification found the grant in place.
    Healthy,
    /// The last verification found problems, see the health message.
    Unhealthy,
    /// A verification was requested and has not finished.
    PendingVerify,
    /// A re-apply was requested and has not finished.
    PendingReApply,
    /// Never verified, or a value this client does not know.
    #[default]
    #[serde(other)]
    Undefined,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Healthy => "Healthy",
            Self::Unhealthy => "Unhealthy",
            Self::PendingVerify => "PendingVerify",
            Self::PendingReApply => "PendingReApply",
            Self::Undefined => "Undefined",
        };
        write!(f, "{s}")
    }
}

/// Role of the current viewer on a share request, computed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Member of the requesting team.
    Requesters,
    /// Owner or steward of the dataset.
    Approvers,
    /// Both at once.
    ApproversAndRequesters,
}

impl UserRole {
    /// The viewer may act as requester.
    pub fn is_requester(&self) -> bool {
        matches!(self, Self::Requesters | Self::ApproversAndRequesters)
    }

    /// The viewer may act as approver.
    pub fn is_approver(&self) -> bool {
        matches!(self, Self::Approvers | Self::ApproversAndRequesters)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Requesters => "Requesters",
            Self::Approvers => "Approvers",
            Self::ApproversAndRequesters => "ApproversAndRequesters",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_status_wire_names() {
        for status in ShareItemStatus::ALL {
            let json = serde_json::to_string(&status).expect("serialize");
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_removable_statuses() {
        let blocked = [
            ShareItemStatus::ShareSucceeded,
            ShareItemStatus::RevokeFailed,
            ShareItemStatus::ShareApproved,
            ShareItemStatus::RevokeApproved,
            ShareItemStatus::RevokeInProgress,
            ShareItemStatus::ShareInProgress,
        ];
        for status in ShareItemStatus::ALL {
            assert_eq!(status.is_removable(), !blocked.contains(&status), "{status}");
        }
    }

    #[test]
    fn test_unknown_object_status_is_rejected() {
        let result: Result<ShareObjectStatus, _> = serde_json::from_str("\"Revoked\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_health_status_is_undefined() {
        let health: HealthStatus = serde_json::from_str("\"Something\"").expect("deserialize");
        assert_eq!(health, HealthStatus::Undefined);
    }

    #[test]
    fn test_role_predicates() {
        assert!(UserRole::ApproversAndRequesters.is_requester());
        assert!(UserRole::ApproversAndRequesters.is_approver());
        assert!(!UserRole::Approvers.is_requester());
        assert!(!UserRole::Requesters.is_approver());
    }
}
