//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::domain::GroupStore;
use crate::domain::ports::{
    ContactRepository, LoginService, ReportCatalogue, SubmissionRepository, UserRepository,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UserRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub reports: Arc<dyn ReportCatalogue>,
    pub submissions: Arc<dyn SubmissionRepository>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UserRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub reports: Arc<dyn ReportCatalogue>,
    pub submissions: Arc<dyn SubmissionRepository>,
    /// Read-only organisational hierarchy.
    pub groups: Arc<GroupStore>,
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Construct state from the ports bundle, the hierarchy and a clock.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use zoe_api::domain::GroupStore;
    /// use zoe_api::inbound::http::state::{HttpState, HttpStatePorts};
    /// use zoe_api::outbound::memory::{
    ///     InMemoryContactRepository, InMemoryReportCatalogue, InMemorySubmissionRepository,
    ///     InMemoryUserRepository,
    /// };
    ///
    /// let users = Arc::new(InMemoryUserRepository::new(Vec::new()));
    /// let ports = HttpStatePorts {
    ///     login: users.clone(),
    ///     users,
    ///     contacts: Arc::new(InMemoryContactRepository::new(Vec::new())),
    ///     reports: Arc::new(InMemoryReportCatalogue::new(Vec::new())),
    ///     submissions: Arc::new(InMemorySubmissionRepository::new(Vec::new())),
    /// };
    /// let groups = GroupStore::new(Vec::new()).expect("empty hierarchy");
    /// let state = HttpState::new(ports, Arc::new(groups), Arc::new(mockable::DefaultClock));
    /// assert!(state.groups.is_empty());
    /// ```
    pub fn new(ports: HttpStatePorts, groups: Arc<GroupStore>, clock: Arc<dyn Clock>) -> Self {
        let HttpStatePorts {
            login,
            users,
            contacts,
            reports,
            submissions,
        } = ports;
        Self {
            login,
            users,
            contacts,
            reports,
            submissions,
            groups,
            clock,
        }
    }

    /// Current instant according to the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }
}
