//! Page request parsing and slicing.

use serde::{Deserialize, Serialize};

use crate::envelope::{Page, Pagination};
use crate::error::PaginationError;

/// Limit applied when the caller omits `limit`.
pub const DEFAULT_LIMIT: usize = 50;

/// Largest page a caller may request.
pub const MAX_LIMIT: usize = 500;

/// Raw `limit`/`offset` query parameters as they arrive on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Requested page size.
    pub limit: Option<usize>,
    /// Number of items to skip.
    pub offset: Option<usize>,
}

impl PageParams {
    /// Validate the parameters, filling gaps with `default_limit` and a zero
    /// offset.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] when the effective limit is zero or above
    /// [`MAX_LIMIT`].
    pub fn into_request(self, default_limit: usize) -> Result<PageRequest, PaginationError> {
        PageRequest::new(self.limit.unwrap_or(default_limit), self.offset.unwrap_or(0))
    }
}

/// Validated offset window over an ordered collection.
///
/// ## Invariants
/// - `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: usize,
    offset: usize,
}

impl PageRequest {
    /// Build a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroLimit`] for a zero limit and
    /// [`PaginationError::LimitTooLarge`] above [`MAX_LIMIT`].
    pub const fn new(limit: usize, offset: usize) -> Result<Self, PaginationError> {
        if limit == 0 {
            return Err(PaginationError::ZeroLimit);
        }
        if limit > MAX_LIMIT {
            return Err(PaginationError::LimitTooLarge {
                max: MAX_LIMIT,
                actual: limit,
            });
        }
        Ok(Self { limit, offset })
    }

    /// Page size.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Number of leading items skipped.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Cut the requested window out of `items`, preserving order, and wrap it
    /// in the response envelope.
    #[must_use]
    pub fn paginate<T>(self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let window = items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect();
        Page {
            items: window,
            pagination: Pagination::new(total, self),
        }
    }
}
