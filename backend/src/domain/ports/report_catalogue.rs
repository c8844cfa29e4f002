//! Read-side port for report definitions.
use async_trait::async_trait;

use crate::domain::{Report, ReportId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading report definitions.
    pub enum ReportCatalogueError {
        /// The backing store failed.
        Storage { message: String } => "report catalogue read failed: {message}",
    }
}

/// Port for reading report definitions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportCatalogue: Send + Sync {
    /// All reports, in ascending id order.
    async fn list(&self) -> Result<Vec<Report>, ReportCatalogueError>;

    /// Fetch a report by identifier.
    async fn find(&self, id: ReportId) -> Result<Option<Report>, ReportCatalogueError>;
}
