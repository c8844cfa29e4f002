//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports describe the stores the HTTP adapter reads and appends to;
//! the driving [`LoginService`] port authenticates credentials. Each driven
//! port carries its own error enum so adapters map failures into predictable
//! variants.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_repository;
mod login_service;
mod report_catalogue;
mod submission_repository;
mod user_repository;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use report_catalogue::MockReportCatalogue;
pub use report_catalogue::{ReportCatalogue, ReportCatalogueError};
#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
pub use submission_repository::{SubmissionRepository, SubmissionRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
