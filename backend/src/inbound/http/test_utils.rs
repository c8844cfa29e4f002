//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::{
    MockContactRepository, MockLoginService, MockReportCatalogue, MockSubmissionRepository,
    MockUserRepository,
};
use crate::domain::{Contact, Gender, GroupId, GroupStore, User, UserId, UserParts};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::seed::hierarchy_groups;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Instant every handler test treats as "now": Thursday 12 June 2025, 09:00 UTC.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        fixture_now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixture_now()
    }
}

/// Port mocks for handler tests, over the seeded group hierarchy.
pub struct TestPorts {
    pub login: MockLoginService,
    pub users: MockUserRepository,
    pub contacts: MockContactRepository,
    pub reports: MockReportCatalogue,
    pub submissions: MockSubmissionRepository,
}

impl Default for TestPorts {
    fn default() -> Self {
        Self {
            login: MockLoginService::new(),
            users: MockUserRepository::new(),
            contacts: MockContactRepository::new(),
            reports: MockReportCatalogue::new(),
            submissions: MockSubmissionRepository::new(),
        }
    }
}

impl TestPorts {
    /// Freeze the expectations into handler state.
    pub fn into_state(self) -> HttpState {
        let groups = GroupStore::new(hierarchy_groups()).expect("seeded hierarchy is valid");
        HttpState::new(
            HttpStatePorts {
                login: Arc::new(self.login),
                users: Arc::new(self.users),
                contacts: Arc::new(self.contacts),
                reports: Arc::new(self.reports),
                submissions: Arc::new(self.submissions),
            },
            Arc::new(groups),
            Arc::new(FixtureClock),
        )
    }
}

fn ids(raw: &[u32]) -> Vec<GroupId> {
    raw.iter().copied().map(GroupId::new).collect()
}

/// Account managing `manage` and viewing `view`, with password `password123`.
pub fn account(id: u32, manage: &[u32], view: &[u32]) -> User {
    User::try_from_parts(UserParts {
        id: UserId::new(id),
        username: format!("user{id}@worshipharvest.org"),
        password: "password123".to_owned(),
        contact_id: 1,
        full_name: format!("Test User {id}"),
        email: format!("user{id}@worshipharvest.org"),
        roles: vec!["MC Shepherd".to_owned()],
        permissions: vec!["REPORT_SUBMIT".to_owned()],
        manage_group_ids: ids(manage),
        view_group_ids: ids(view),
    })
    .expect("valid fixture account")
}

/// Contact `id` belonging to `group`.
pub fn member(id: u32, first_name: &str, last_name: &str, group: u32) -> Contact {
    Contact {
        id,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: Some(format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        )),
        phone: "+256700000000".to_owned(),
        gender: Gender::Female,
        age_group: "20-30".to_owned(),
        date_of_birth: None,
        civil_status: "Single".to_owned(),
        place_of_work: None,
        group_id: GroupId::new(group),
        role: "Member".to_owned(),
        country: "Uganda".to_owned(),
        district: "Kampala".to_owned(),
        free_form: None,
    }
}
