//! Role- and status-gated transition table for share requests.
//!
//! | Status    | Legal exits                       | Who                 |
//! |-----------|-----------------------------------|---------------------|
//! | Draft     | submit, delete                    | requesters          |
//! | Submitted | approve, reject                   | approvers           |
//! | Approved  | none (backend moves to Processed) | system              |
//! | Rejected  | submit, delete                    | requesters          |
//! | Processed | submit, delete                    | requesters          |
//!
//! Item operations are gated separately: add and remove need the requester
//! role, re-apply needs the approver role, verify and revoke are open to
//! every role.

use std::fmt;

use dataall_core::error::AppError;
use dataall_core::result::AppResult;
use dataall_core::types::ShareItemUri;
use dataall_entity::share::{ShareItem, ShareItemStatus, ShareObject, ShareObjectStatus, UserRole};

/// Message the backend returns when deleting a request that still grants
/// access. Reused for the local refusal.
pub const SHARED_ITEMS_FOUND: &str = "There are shared items in this request. Revoke access to these items before deleting the request.";

/// A user-triggered operation on a share request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareAction {
    /// Send the request for approval.
    Submit,
    /// Grant the request.
    Approve,
    /// Refuse the request.
    Reject,
    /// Remove the request.
    Delete,
    /// Attach an item.
    AddItem,
    /// Detach an item.
    RemoveItem,
    /// Revoke granted items.
    Revoke,
    /// Check the health of granted items.
    Verify,
    /// Re-run provisioning of granted items.
    ReApply,
    /// Edit the request purpose.
    UpdateRequestPurpose,
    /// Edit the reject purpose.
    UpdateRejectPurpose,
}

impl ShareAction {
    /// All actions.
    pub const ALL: [ShareAction; 11] = [
        Self::Submit,
        Self::Approve,
        Self::Reject,
        Self::Delete,
        Self::AddItem,
        Self::RemoveItem,
        Self::Revoke,
        Self::Verify,
        Self::ReApply,
        Self::UpdateRequestPurpose,
        Self::UpdateRejectPurpose,
    ];

    /// Lower-case label for logs and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Delete => "delete",
            Self::AddItem => "add item",
            Self::RemoveItem => "remove item",
            Self::Revoke => "revoke",
            Self::Verify => "verify",
            Self::ReApply => "re-apply",
            Self::UpdateRequestPurpose => "update request purpose",
            Self::UpdateRejectPurpose => "update reject purpose",
        }
    }

    fn requires(&self) -> Option<fn(&UserRole) -> bool> {
        match self {
            Self::Submit
            | Self::Delete
            | Self::AddItem
            | Self::RemoveItem
            | Self::UpdateRequestPurpose => Some(UserRole::is_requester),
            Self::Approve | Self::Reject | Self::ReApply | Self::UpdateRejectPurpose => {
                Some(UserRole::is_approver)
            }
            Self::Revoke | Self::Verify => None,
        }
    }

    fn allowed_in(&self, status: ShareObjectStatus) -> bool {
        use ShareObjectStatus::*;
        match self {
            Self::Submit | Self::Delete => matches!(status, Draft | Rejected | Processed),
            Self::Approve | Self::Reject => status == Submitted,
            Self::AddItem => status != Approved,
            Self::RemoveItem
            | Self::Revoke
            | Self::Verify
            | Self::ReApply
            | Self::UpdateRequestPurpose
            | Self::UpdateRejectPurpose => true,
        }
    }
}

impl fmt::Display for ShareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check the viewer's role and the request's status for an action.
///
/// A role mismatch is an authorization error; a status mismatch is a
/// conflict.
pub fn authorize(action: ShareAction, share: &ShareObject) -> AppResult<()> {
    let role = share.user_role_for_share_object;
    if let Some(has_role) = action.requires() {
        if !has_role(&role) {
            return Err(AppError::authorization(format!(
                "Role {role} cannot {action} a share request"
            )));
        }
    }

    if !action.allowed_in(share.status) {
        return Err(AppError::conflict(format!(
            "Cannot {action} a share request in status {}",
            share.status
        )));
    }

    Ok(())
}

/// Full precondition check for submit. `items` is every item attached
/// to the request.
pub fn check_submit(share: &ShareObject, items: &[ShareItem]) -> AppResult<()> {
    if share.status == ShareObjectStatus::Submitted {
        return Err(AppError::conflict("The share request is already submitted"));
    }
    authorize(ShareAction::Submit, share)?;

    let no_pending = share.status == ShareObjectStatus::Processed
        && !items
            .iter()
            .any(|item| item.status == ShareItemStatus::PendingApproval);
    if items.is_empty() || no_pending {
        return Err(AppError::validation(
            "The request is empty of pending items. Add items to the share request.",
        ));
    }
    Ok(())
}

/// Full precondition check for delete. `items` is every item attached to
/// the request.
pub fn check_delete(share: &ShareObject, items: &[ShareItem]) -> AppResult<()> {
    authorize(ShareAction::Delete, share)?;

    let blocked = items
        .iter()
        .any(|item| item.status.is_shared() || item.status.is_in_progress());
    if blocked {
        return Err(AppError::conflict(SHARED_ITEMS_FOUND));
    }
    Ok(())
}

/// Full precondition check for removing one item.
pub fn check_remove_item(
    share: &ShareObject,
    item: Option<&ShareItem>,
    uri: &ShareItemUri,
) -> AppResult<()> {
    authorize(ShareAction::RemoveItem, share)?;

    let item = item.ok_or_else(|| {
        AppError::not_found(format!("Item {uri} is not attached to this share request"))
    })?;

    if item.status.is_shared() {
        return Err(AppError::conflict(format!(
            "Item {} is shared. Revoke access to it before removing it.",
            item.item_name
        )));
    }
    if item.status.is_in_progress() {
        return Err(AppError::conflict(format!(
            "Item {} has an operation in progress ({}). Wait for it to finish.",
            item.item_name, item.status
        )));
    }
    Ok(())
}

/// Full precondition check for revoke. `items` is every item attached to
/// the request.
pub fn check_revoke(share: &ShareObject, items: &[ShareItem]) -> AppResult<()> {
    authorize(ShareAction::Revoke, share)?;

    if !items.iter().any(|item| item.status.is_shared()) {
        return Err(AppError::conflict(
            "No item of this share request is currently shared",
        ));
    }
    Ok(())
}

/// Actions whose role and status gates pass, for rendering.
pub fn available_actions(share: &ShareObject) -> Vec<ShareAction> {
    ShareAction::ALL
        .into_iter()
        .filter(|action| authorize(*action, share).is_ok())
        .collect()
}
