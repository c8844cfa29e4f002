//! Startup seeding of the in-memory dataset.
//!
//! Groups, reports and test accounts are static fixtures. Contacts and the
//! recurring report history come from the `example-data` generators, seeded
//! by a named entry in the JSON seed registry so that restarts with the same
//! seed serve the same data.

mod groups;
mod history;
mod reports;
mod users;

use chrono::{DateTime, Utc};
use example_data::{
    GenerationError, GenderSeed, MembershipTemplate, RegistryError, SeedDefinition, SeedRegistry,
    generate_contacts,
};
use thiserror::Error;
use tracing::info;

use crate::domain::{
    Contact, Gender, GroupId, GroupStore, GroupType, HierarchyError, Report, Submission, User,
    UserValidationError,
};
use crate::settings::ServerSettings;

pub use groups::hierarchy_groups;
pub use reports::{BAPTISM, MC_ATTENDANCE, SALVATION, SUNDAY_SERVICE, report_definitions};
pub use users::{TEST_PASSWORD, test_users};

/// Errors returned while building the dataset.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// Registry loading or lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Contact generation failed.
    #[error("contact generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// The group fixtures violate a hierarchy invariant.
    #[error("invalid group hierarchy: {0}")]
    Hierarchy(#[from] HierarchyError),
    /// A test account fixture is invalid.
    #[error("invalid test account: {0}")]
    Account(#[from] UserValidationError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Everything the server holds in memory.
#[derive(Debug)]
pub struct Dataset {
    /// Organisational hierarchy.
    pub groups: GroupStore,
    /// CRM contacts, in id order.
    pub contacts: Vec<Contact>,
    /// Report definitions, in id order.
    pub reports: Vec<Report>,
    /// Report submissions.
    pub submissions: Vec<Submission>,
    /// Test accounts, in id order.
    pub users: Vec<User>,
}

impl Dataset {
    /// Build the dataset for `seed`, anchoring report history at `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use example_data::SeedDefinition;
    /// use zoe_api::seed::Dataset;
    ///
    /// let now = Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0).unwrap();
    /// let dataset = Dataset::build(&SeedDefinition::new("doc", 1), now).expect("dataset");
    /// assert_eq!(dataset.reports.len(), 4);
    /// assert_eq!(dataset.users.len(), 7);
    /// ```
    pub fn build(seed: &SeedDefinition, now: DateTime<Utc>) -> Result<Self, SeedingError> {
        let groups = GroupStore::new(hierarchy_groups())?;
        let contacts = generate_contacts(seed, &membership_templates(&groups))?
            .into_iter()
            .map(contact_from_seed)
            .collect::<Vec<_>>();
        let reports = report_definitions();
        let submissions = history::submissions(seed, &groups, &contacts, &reports, now);
        let users = test_users()?;

        Ok(Self {
            groups,
            contacts,
            reports,
            submissions,
            users,
        })
    }
}

/// Load the registry named by `settings` and build the dataset.
pub fn load_dataset(
    settings: &ServerSettings,
    now: DateTime<Utc>,
) -> Result<Dataset, SeedingError> {
    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(SeedingError::EmptySeedName);
    }
    let registry = SeedRegistry::from_file(&settings.registry_path())?;
    let seed = registry.find_seed(seed_name)?;
    let dataset = Dataset::build(seed, now)?;

    info!(
        seed_key = seed_name,
        groups = dataset.groups.len(),
        contacts = dataset.contacts.len(),
        reports = dataset.reports.len(),
        submissions = dataset.submissions.len(),
        users = dataset.users.len(),
        "dataset seeded"
    );
    Ok(dataset)
}

fn membership_templates(groups: &GroupStore) -> Vec<MembershipTemplate> {
    groups
        .by_type(GroupType::Fellowship)
        .into_iter()
        .map(|fellowship| {
            let address = groups
                .ancestor_of_type(fellowship.id, GroupType::Location)
                .and_then(|location| location.address.as_ref());
            MembershipTemplate {
                group_id: fellowship.id.get(),
                member_count: fellowship.member_count,
                country: address.map_or_else(|| "Uganda".to_owned(), |a| a.country.clone()),
                district: address.map_or_else(|| "Kampala".to_owned(), |a| a.district.clone()),
            }
        })
        .collect()
}

fn contact_from_seed(seed: example_data::ExampleContactSeed) -> Contact {
    Contact {
        id: seed.id,
        first_name: seed.first_name,
        last_name: seed.last_name,
        email: seed.email,
        phone: seed.phone,
        gender: match seed.gender {
            GenderSeed::Male => Gender::Male,
            GenderSeed::Female => Gender::Female,
        },
        age_group: seed.age_group,
        date_of_birth: seed.date_of_birth,
        civil_status: seed.civil_status,
        place_of_work: seed.place_of_work,
        group_id: GroupId::new(seed.group_id),
        role: seed.role,
        country: seed.country,
        district: seed.district,
        free_form: None,
    }
}
