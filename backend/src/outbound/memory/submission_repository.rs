//! Submission store backed by a locked vector.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{SubmissionRepository, SubmissionRepositoryError};
use crate::domain::{NewSubmission, Submission, SubmissionFilter, newest_first};

/// Submissions in insertion order; reads sort newest first.
#[derive(Debug, Default)]
pub struct InMemorySubmissionRepository {
    submissions: RwLock<Vec<Submission>>,
}

impl InMemorySubmissionRepository {
    /// Create a repository holding `submissions`.
    #[must_use]
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self {
            submissions: RwLock::new(submissions),
        }
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn list(
        &self,
        filter: SubmissionFilter,
    ) -> Result<Vec<Submission>, SubmissionRepositoryError> {
        let submissions = self.submissions.read().await;
        let mut matching: Vec<Submission> = submissions
            .iter()
            .filter(|submission| filter.matches(submission))
            .cloned()
            .collect();
        matching.sort_by(newest_first);
        Ok(matching)
    }

    async fn find(&self, id: u64) -> Result<Option<Submission>, SubmissionRepositoryError> {
        let submissions = self.submissions.read().await;
        Ok(submissions
            .iter()
            .find(|submission| submission.id == id)
            .cloned())
    }

    async fn create(
        &self,
        submission: NewSubmission,
    ) -> Result<Submission, SubmissionRepositoryError> {
        let mut submissions = self.submissions.write().await;
        let id = submissions
            .iter()
            .map(|existing| existing.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
            .ok_or_else(|| SubmissionRepositoryError::storage("submission ids exhausted"))?;
        let created = submission.into_submission(id);
        submissions.push(created.clone());
        Ok(created)
    }
}
