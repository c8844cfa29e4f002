//! Response envelope for paginated collections.

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Pagination metadata reported next to every page of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of items in the whole filtered collection.
    pub total: usize,
    /// Page size that was applied.
    pub limit: usize,
    /// Number of items skipped.
    pub offset: usize,
    /// Whether items remain beyond this page.
    pub has_more: bool,
}

impl Pagination {
    /// Describe `request` applied to a collection of `total` items.
    #[must_use]
    pub const fn new(total: usize, request: PageRequest) -> Self {
        Self {
            total,
            limit: request.limit(),
            offset: request.offset(),
            has_more: request.offset().saturating_add(request.limit()) < total,
        }
    }
}

/// A window of items plus its [`Pagination`] metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in this window, in collection order.
    pub items: Vec<T>,
    /// Metadata describing the window.
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Wrap a complete collection as a single page.
    #[must_use]
    pub fn whole(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            items,
            pagination: Pagination {
                total,
                limit: total,
                offset: 0,
                has_more: false,
            },
        }
    }

    /// Convert each item while keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
