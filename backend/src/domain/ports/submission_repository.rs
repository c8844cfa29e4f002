//! Port abstraction for report submission storage.
use async_trait::async_trait;

use crate::domain::{NewSubmission, Submission, SubmissionFilter};

use super::define_port_error;

define_port_error! {
    /// Errors raised by submission repository adapters.
    pub enum SubmissionRepositoryError {
        /// The backing store failed.
        Storage { message: String } => "submission storage failed: {message}",
    }
}

/// Read and append access to report submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Submissions matching `filter`, newest first.
    ///
    /// Ordering is `(submitted_at desc, id desc)`.
    async fn list(
        &self,
        filter: SubmissionFilter,
    ) -> Result<Vec<Submission>, SubmissionRepositoryError>;

    /// Fetch a submission by identifier.
    async fn find(&self, id: u64) -> Result<Option<Submission>, SubmissionRepositoryError>;

    /// Append a submission under the next free identifier.
    async fn create(
        &self,
        submission: NewSubmission,
    ) -> Result<Submission, SubmissionRepositoryError>;
}
