//! Pagination types shared by every list-shaped GraphQL response.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 1000;

/// Filter argument accepted by paged queries (`ShareableObjectFilter`,
/// `ShareObjectFilter`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFilter {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Free-text search term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Restrict share items to the ones attached to the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shared: Option<bool>,
    /// Restrict listings to these statuses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
}

impl PageFilter {
    /// Create a new filter for the given page.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            ..Self::default()
        }
    }

    /// Only items already attached to the share request.
    pub fn shared_only(mut self) -> Self {
        self.is_shared = Some(true);
        self
    }

    /// Filter by search term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }
}

impl Default for PageFilter {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            term: None,
            is_shared: None,
            status: None,
        }
    }
}

/// Paginated response wrapper, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Total number of items across all pages.
    #[serde(default)]
    pub count: u64,
    /// Current page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Total number of pages.
    #[serde(default = "default_page")]
    pub pages: u64,
    /// Whether there is a next page.
    #[serde(default)]
    pub has_next: bool,
    /// Whether there is a previous page.
    #[serde(default)]
    pub has_previous: bool,
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Page<T> {
    /// Create an empty page.
    pub fn empty() -> Self {
        Self {
            count: 0,
            page: 1,
            pages: 1,
            has_next: false,
            has_previous: false,
            nodes: Vec::new(),
        }
    }

    /// Whether the page has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

fn default_page() -> u64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_serializes_camel_case_and_skips_unset() {
        let filter = PageFilter::new(2, 20).shared_only();
        let json = serde_json::to_value(&filter).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"page": 2, "pageSize": 20, "isShared": true})
        );
    }

    #[test]
    fn test_filter_clamps_page_and_size() {
        let filter = PageFilter::new(0, 0);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.page_size, 1);
    }

    #[test]
    fn test_page_tolerates_missing_counters() {
        let page: Page<u32> = serde_json::from_value(serde_json::json!({"nodes": [1, 2]}))
            .expect("deserialize");
        assert_eq!(page.nodes, vec![1, 2]);
        assert_eq!(page.pages, 1);
        assert!(!page.has_next);
    }
}
