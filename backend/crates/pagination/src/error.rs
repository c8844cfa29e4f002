//! Errors raised while validating pagination parameters.

use thiserror::Error;

/// Validation failures for [`crate::PageRequest`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A limit of zero can never return items.
    #[error("limit must be at least 1")]
    ZeroLimit,

    /// The requested limit exceeds the largest page the server will build.
    #[error("limit must be at most {max}, got {actual}")]
    LimitTooLarge {
        /// Largest accepted limit.
        max: usize,
        /// Limit supplied by the caller.
        actual: usize,
    },
}
