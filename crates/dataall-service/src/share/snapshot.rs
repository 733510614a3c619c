//! Last fetched state of one share request.

use chrono::{DateTime, Utc};

use dataall_core::types::ShareItemUri;
use dataall_entity::share::{ConsumptionData, ShareItem, ShareItemStatus, ShareObject};

/// What the view renders. Replaced wholesale by every fetch, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareSnapshot {
    /// The request with the displayed page of items.
    pub share: ShareObject,
    /// Every item attached to the request, across all pages. Item gates
    /// are decided on this set, never on the displayed page.
    pub items: Vec<ShareItem>,
    /// How to consume the granted data, when the backend provides it.
    pub consumption: Option<ConsumptionData>,
    /// When the snapshot was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl ShareSnapshot {
    /// Look up an attached item by URI.
    pub fn find_item(&self, uri: &ShareItemUri) -> Option<&ShareItem> {
        self.items.iter().find(|item| &item.share_item_uri == uri)
    }

    /// Attached items whose status matches the predicate.
    pub fn items_where(&self, pred: impl Fn(ShareItemStatus) -> bool) -> Vec<&ShareItem> {
        self.items.iter().filter(|item| pred(item.status)).collect()
    }
}
