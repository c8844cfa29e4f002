//! Offset pagination primitives shared by the Zoe API list endpoints.
//!
//! Every list endpoint accepts optional `limit` and `offset` query
//! parameters and answers with the same envelope:
//!
//! ```json
//! {"items": [...], "pagination": {"total": 9, "limit": 2, "offset": 0, "hasMore": true}}
//! ```
//!
//! # Example
//!
//! ```
//! use pagination::{PageParams, PageRequest};
//!
//! let request = PageParams { limit: Some(2), offset: Some(2) }
//!     .into_request(50)
//!     .expect("valid page request");
//! let page = request.paginate(vec![1, 2, 3, 4, 5]);
//!
//! assert_eq!(page.items, vec![3, 4]);
//! assert!(page.pagination.has_more);
//! ```

mod envelope;
mod error;
mod request;

pub use envelope::{Page, Pagination};
pub use error::PaginationError;
pub use request::{DEFAULT_LIMIT, MAX_LIMIT, PageParams, PageRequest};
