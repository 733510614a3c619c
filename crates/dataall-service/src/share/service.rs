//! Share request listings.

use std::sync::Arc;

use tracing::debug;

use dataall_core::result::AppResult;
use dataall_core::types::{Page, PageFilter};
use dataall_entity::share::ShareSummary;
use dataall_graphql::queries::share as queries;

use crate::client::ApiClient;

/// Lists share requests addressed to, or created by, the viewer.
#[derive(Debug, Clone)]
pub struct ShareService {
    client: Arc<ApiClient>,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Requests on datasets the viewer may approve.
    pub async fn inbox(&self, filter: &PageFilter) -> AppResult<Page<ShareSummary>> {
        let page = self
            .client
            .execute(&queries::share_requests_to_me(filter))
            .await?;
        debug!(count = page.count, page = page.page, "Fetched share inbox");
        Ok(page)
    }

    /// Requests the viewer's teams created.
    pub async fn outbox(&self, filter: &PageFilter) -> AppResult<Page<ShareSummary>> {
        let page = self
            .client
            .execute(&queries::share_requests_from_me(filter))
            .await?;
        debug!(count = page.count, page = page.page, "Fetched share outbox");
        Ok(page)
    }
}
