//! In-memory adapters implementing the domain store ports.
//!
//! Each adapter owns its collection behind a [`tokio::sync::RwLock`]; a lock
//! is held for the duration of one read or append. Collections are seeded at
//! startup and live for the process lifetime.

mod contact_repository;
mod report_catalogue;
mod submission_repository;
mod user_repository;

pub use contact_repository::InMemoryContactRepository;
pub use report_catalogue::InMemoryReportCatalogue;
pub use submission_repository::InMemorySubmissionRepository;
pub use user_repository::InMemoryUserRepository;

use std::sync::Arc;

use mockable::Clock;

use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::seed::Dataset;

/// Build handler state over in-memory adapters holding `dataset`.
///
/// The user store doubles as the login service.
#[must_use]
pub fn seeded_state(dataset: Dataset, clock: Arc<dyn Clock>) -> HttpState {
    let Dataset {
        groups,
        contacts,
        reports,
        submissions,
        users,
    } = dataset;
    let users = Arc::new(InMemoryUserRepository::new(users));
    HttpState::new(
        HttpStatePorts {
            login: users.clone(),
            users,
            contacts: Arc::new(InMemoryContactRepository::new(contacts)),
            reports: Arc::new(InMemoryReportCatalogue::new(reports)),
            submissions: Arc::new(InMemorySubmissionRepository::new(submissions)),
        },
        Arc::new(groups),
        clock,
    )
}
