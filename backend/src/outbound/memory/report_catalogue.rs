//! Fixed report definitions.

use async_trait::async_trait;

use crate::domain::ports::{ReportCatalogue, ReportCatalogueError};
use crate::domain::{Report, ReportId};

/// Report definitions seeded at startup; never modified.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportCatalogue {
    reports: Vec<Report>,
}

impl InMemoryReportCatalogue {
    /// Create a catalogue holding `reports`.
    #[must_use]
    pub fn new(mut reports: Vec<Report>) -> Self {
        reports.sort_by_key(|report| report.id);
        Self { reports }
    }
}

#[async_trait]
impl ReportCatalogue for InMemoryReportCatalogue {
    async fn list(&self) -> Result<Vec<Report>, ReportCatalogueError> {
        Ok(self.reports.clone())
    }

    async fn find(&self, id: ReportId) -> Result<Option<Report>, ReportCatalogueError> {
        Ok(self.reports.iter().find(|report| report.id == id).cloned())
    }
}
