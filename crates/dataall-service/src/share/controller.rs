//! Lifecycle controller for one share request.

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use dataall_core::error::AppError;
use dataall_core::events::ConsoleEvent;
use dataall_core::result::AppResult;
use dataall_core::types::{ItemUri, PageFilter, ShareItemUri, ShareUri};
use dataall_entity::share::{ShareItem, ShareableType};
use dataall_graphql::operation::Operation;
use dataall_graphql::queries::share as queries;

use super::inputs::{AddItemInput, ItemSelection, PurposeInput, RejectInput};
use super::policy::{self, ShareAction};
use super::snapshot::ShareSnapshot;
use crate::client::ApiClient;

/// Route of the share list, shown after a request is deleted.
pub const SHARES_PATHNAME: &str = "/console/shares";

/// Page size used when collecting every attached item.
const ATTACHED_PAGE_SIZE: u64 = 1000;

/// Result of a successful operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOutcome {
    /// What was done.
    pub action: ShareAction,
    /// Message shown to the user.
    pub message: String,
    /// Whether the local snapshot reflects the server after the operation.
    /// `false` when the request was deleted or the re-fetch failed. After a
    /// failed re-fetch the snapshot is cleared rather than left stale, so
    /// `snapshot()` returns `None` and the next operation fetches the
    /// request again before checking its gates.
    pub refreshed: bool,
    /// Route the view should move to, if any.
    pub navigate_to: Option<String>,
}

impl ShareOutcome {
    fn completed(action: ShareAction, message: &str, refreshed: bool) -> Self {
        Self {
            action,
            message: message.to_string(),
            refreshed,
            navigate_to: None,
        }
    }

    /// Events the UI layer dispatches for this outcome.
    pub fn events(&self) -> Vec<ConsoleEvent> {
        let mut events = vec![ConsoleEvent::success(self.message.clone())];
        if let Some(pathname) = &self.navigate_to {
            events.push(ConsoleEvent::Navigate {
                pathname: pathname.clone(),
            });
        }
        events
    }
}

/// Drives one share request through its lifecycle.
///
/// Every operation checks the transition table against the last fetched
/// snapshot, sends the mutation, and on success re-fetches the request
/// instead of patching local state. Failures leave the snapshot untouched.
/// Nothing is dispatched from here: callers turn the returned outcome or
/// error into notifications.
#[derive(Debug)]
pub struct ShareController {
    share_uri: ShareUri,
    client: Arc<ApiClient>,
    items_filter: PageFilter,
    snapshot: Option<ShareSnapshot>,
}

impl ShareController {
    /// Bind a controller to one share request.
    pub fn new(share_uri: ShareUri, client: Arc<ApiClient>) -> Self {
        Self {
            share_uri,
            client,
            items_filter: PageFilter::default(),
            snapshot: None,
        }
    }

    /// Use a different page of items.
    pub fn with_items_filter(mut self, filter: PageFilter) -> Self {
        self.items_filter = filter;
        self
    }

    /// The bound request.
    pub fn share_uri(&self) -> &ShareUri {
        &self.share_uri
    }

    /// The route of this request's view.
    pub fn pathname(&self) -> String {
        format!("{SHARES_PATHNAME}/{}", self.share_uri)
    }

    /// The last fetched state, if any.
    pub fn snapshot(&self) -> Option<&ShareSnapshot> {
        self.snapshot.as_ref()
    }

    /// Open the request's view and fetch it.
    pub async fn load(&mut self) -> AppResult<&ShareSnapshot> {
        if let Err(e) = self.client.session().navigate(&self.pathname()).await {
            warn!(error = %e, "Failed to record current location");
        }
        self.refresh().await
    }

    /// Fetch the request, every attached item and its consumption data, and
    /// replace the snapshot.
    pub async fn refresh(&mut self) -> AppResult<&ShareSnapshot> {
        let snapshot = self.fetch().await?;
        Ok(self.snapshot.insert(snapshot))
    }

    async fn fetch(&self) -> AppResult<ShareSnapshot> {
        let share = self
            .client
            .execute(&queries::get_share_object(&self.share_uri, &self.items_filter))
            .await?;

        let items = self.fetch_attached_items().await?;

        let consumption = match self
            .client
            .execute(&queries::get_consumption_data(&self.share_uri))
            .await
        {
            Ok(data) => data,
            Err(e) if e.is_auth_expired() => return Err(e),
            Err(e) => {
                warn!(
                    share_uri = %self.share_uri,
                    error = %e,
                    "Consumption data unavailable"
                );
                None
            }
        };

        Ok(ShareSnapshot {
            share,
            items,
            consumption,
            fetched_at: Utc::now(),
        })
    }

    /// Collect every attached item, one page at a time, until the
    /// backend's total count is reached.
    async fn fetch_attached_items(&self) -> AppResult<Vec<ShareItem>> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let filter = PageFilter::new(page, ATTACHED_PAGE_SIZE).shared_only();
            let batch = self
                .client
                .execute(&queries::get_share_object(&self.share_uri, &filter))
                .await?
                .items;

            let exhausted = batch.nodes.is_empty();
            let total = batch.count;
            items.extend(batch.nodes);
            if exhausted || items.len() as u64 >= total {
                return Ok(items);
            }
            page += 1;
        }
    }

    async fn current(&mut self) -> AppResult<&ShareSnapshot> {
        if self.snapshot.is_none() {
            self.refresh().await?;
        }
        self.snapshot
            .as_ref()
            .ok_or_else(|| AppError::internal("Share request is not loaded"))
    }

    /// Submit the request for approval.
    pub async fn submit(&mut self) -> AppResult<ShareOutcome> {
        let snapshot = self.current().await?;
        policy::check_submit(&snapshot.share, &snapshot.items)?;
        let op = queries::submit_share_object(&self.share_uri);
        self.mutate(ShareAction::Submit, &op, "Share request submitted")
            .await
    }

    /// Approve the request.
    pub async fn approve(&mut self) -> AppResult<ShareOutcome> {
        policy::authorize(ShareAction::Approve, &self.current().await?.share)?;
        let op = queries::approve_share_object(&self.share_uri);
        self.mutate(ShareAction::Approve, &op, "Share request approved")
            .await
    }

    /// Reject the request. Overwrites any previous reason.
    pub async fn reject(&mut self, reject_purpose: &str) -> AppResult<ShareOutcome> {
        let input = RejectInput::new(reject_purpose)?;
        policy::authorize(ShareAction::Reject, &self.current().await?.share)?;
        let op = queries::reject_share_object(&self.share_uri, &input.reject_purpose);
        self.mutate(ShareAction::Reject, &op, "Share request rejected")
            .await
    }

    /// Delete the request. On success the snapshot is dropped and the view
    /// returns to the share list.
    pub async fn delete(&mut self) -> AppResult<ShareOutcome> {
        let snapshot = self.current().await?;
        policy::check_delete(&snapshot.share, &snapshot.items)?;

        let op = queries::delete_share_object(&self.share_uri);
        let deleted = self.client.execute(&op).await?;
        if !deleted {
            return Err(AppError::conflict("The share request was not deleted"));
        }

        self.snapshot = None;
        info!(share_uri = %self.share_uri, "Share request deleted");

        if let Err(e) = self.client.session().navigate(SHARES_PATHNAME).await {
            warn!(error = %e, "Failed to record current location");
        }

        Ok(ShareOutcome {
            navigate_to: Some(SHARES_PATHNAME.to_string()),
            ..ShareOutcome::completed(ShareAction::Delete, "Share request deleted", false)
        })
    }

    /// Attach a dataset item to the request.
    pub async fn add_item(
        &mut self,
        item_uri: ItemUri,
        item_type: ShareableType,
    ) -> AppResult<ShareOutcome> {
        let input = AddItemInput::new(item_uri, item_type)?;
        policy::authorize(ShareAction::AddItem, &self.current().await?.share)?;
        let op = queries::add_shared_item(&self.share_uri, &input.item_uri, input.item_type);
        self.mutate(ShareAction::AddItem, &op, "Item added").await
    }

    /// Detach an item from the request.
    pub async fn remove_item(&mut self, share_item_uri: &ShareItemUri) -> AppResult<ShareOutcome> {
        let snapshot = self.current().await?;
        policy::check_remove_item(
            &snapshot.share,
            snapshot.find_item(share_item_uri),
            share_item_uri,
        )?;
        let op = queries::remove_shared_item(share_item_uri);
        self.mutate(ShareAction::RemoveItem, &op, "Item removed")
            .await
    }

    /// Revoke access to granted items.
    pub async fn revoke_items(&mut self, item_uris: &[ShareItemUri]) -> AppResult<ShareOutcome> {
        let selection = ItemSelection::new(item_uris)?;
        let snapshot = self.current().await?;
        policy::check_revoke(&snapshot.share, &snapshot.items)?;
        let op = queries::revoke_items(&self.share_uri, &selection.item_uris);
        self.mutate(ShareAction::Revoke, &op, "Items revoked").await
    }

    /// Start a health verification of granted items.
    pub async fn verify_items(&mut self, item_uris: &[ShareItemUri]) -> AppResult<ShareOutcome> {
        let selection = ItemSelection::new(item_uris)?;
        policy::authorize(ShareAction::Verify, &self.current().await?.share)?;
        let op = queries::verify_items(&self.share_uri, &selection.item_uris);
        self.mutate(ShareAction::Verify, &op, "Share Item Verification Started.")
            .await
    }

    /// Re-run provisioning of granted items.
    pub async fn reapply_items(&mut self, item_uris: &[ShareItemUri]) -> AppResult<ShareOutcome> {
        let selection = ItemSelection::new(item_uris)?;
        policy::authorize(ShareAction::ReApply, &self.current().await?.share)?;
        let op = queries::reapply_items(&self.share_uri, &selection.item_uris);
        self.mutate(ShareAction::ReApply, &op, "Share Item Re-Apply Started.")
            .await
    }

    /// Edit the request purpose.
    pub async fn update_request_purpose(&mut self, purpose: &str) -> AppResult<ShareOutcome> {
        let input = PurposeInput::new(purpose)?;
        policy::authorize(ShareAction::UpdateRequestPurpose, &self.current().await?.share)?;
        let op = queries::update_request_purpose(&self.share_uri, &input.purpose);
        self.mutate(
            ShareAction::UpdateRequestPurpose,
            &op,
            "Request purpose updated",
        )
        .await
    }

    /// Edit the reject purpose.
    pub async fn update_reject_purpose(&mut self, purpose: &str) -> AppResult<ShareOutcome> {
        let input = PurposeInput::new(purpose)?;
        policy::authorize(ShareAction::UpdateRejectPurpose, &self.current().await?.share)?;
        let op = queries::update_reject_purpose(&self.share_uri, &input.purpose);
        self.mutate(
            ShareAction::UpdateRejectPurpose,
            &op,
            "Reject purpose updated",
        )
        .await
    }

    /// Send a mutation, then re-fetch. The snapshot is only touched after
    /// the mutation succeeded. A failed re-fetch clears it.
    async fn mutate<T: DeserializeOwned>(
        &mut self,
        action: ShareAction,
        operation: &Operation<T>,
        message: &str,
    ) -> AppResult<ShareOutcome> {
        self.client.execute(operation).await?;

        info!(
            share_uri = %self.share_uri,
            action = %action,
            operation = %operation.name(),
            "Share operation completed"
        );
        let refreshed = match self.fetch().await {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                true
            }
            Err(e) => {
                warn!(
                    share_uri = %self.share_uri,
                    error = %e,
                    "Re-fetch after {action} failed"
                );
                self.snapshot = None;
                false
            }
        };

        Ok(ShareOutcome::completed(action, message, refreshed))
    }
}
