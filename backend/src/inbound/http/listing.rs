//! Paginated list envelope shared by the list endpoints.

use pagination::{Page, Pagination};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pagination metadata as it appears on the wire.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationBody {
    /// Items matching the request before slicing.
    #[schema(example = 46)]
    pub total: usize,
    /// Page size.
    #[schema(example = 50)]
    pub limit: usize,
    /// Leading items skipped.
    #[schema(example = 0)]
    pub offset: usize,
    /// Whether items remain beyond this page.
    pub has_more: bool,
}

impl From<Pagination> for PaginationBody {
    fn from(value: Pagination) -> Self {
        Self {
            total: value.total,
            limit: value.limit,
            offset: value.offset,
            has_more: value.has_more,
        }
    }
}

/// `{items, pagination}` envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Window metadata.
    pub pagination: PaginationBody,
}

impl<T> From<Page<T>> for ListResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.items,
            pagination: page.pagination.into(),
        }
    }
}

/// `limit`/`offset` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Page size.
    pub limit: Option<usize>,
    /// Leading items to skip.
    pub offset: Option<usize>,
}
