//! Deterministic contact generation from seed definitions.
//!
//! The same seed value and templates always produce identical contacts.

use chrono::{Datelike, NaiveDate};
use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::registry::SeedDefinition;
use crate::seed::{ExampleContactSeed, GenderSeed, MembershipTemplate};
use crate::validation::{email_for, is_valid_person_name};

/// Maximum number of attempts to generate a valid name part.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Salt mixed into the seed so contact and submission streams differ.
const CONTACT_STREAM: u64 = 0x636f_6e74_6163_7473;

/// Share of contacts (out of ten) that have an email address.
const EMAIL_NUMERATOR: u32 = 8;

const AGE_GROUPS: &[&str] = &["18-20", "20-30", "30-40", "40-50", "50+"];
const CIVIL_STATUSES: &[&str] = &["Single", "Married", "Married", "Widowed"];
const WORKPLACES: &[&str] = &[
    "Makerere University",
    "Stanbic Bank",
    "Mulago Hospital",
    "Self employed",
    "MTN",
    "Ministry of Health",
];

/// Generates contacts for every template, in template order.
///
/// Each group receives `member_count` contacts; the first is recorded with
/// the `Leader` role and the rest as `Member`. Identifiers are sequential
/// starting at 1.
///
/// # Errors
///
/// Returns [`GenerationError::NoGroups`] when `groups` is empty and
/// [`GenerationError::NameGenerationFailed`] if the name dictionary keeps
/// producing invalid names.
///
/// # Example
///
/// ```
/// use example_data::{MembershipTemplate, SeedDefinition, generate_contacts};
///
/// let seed = SeedDefinition::new("doc", 7);
/// let groups = vec![MembershipTemplate {
///     group_id: 100,
///     member_count: 2,
///     country: "Kenya".to_owned(),
///     district: "Nairobi".to_owned(),
/// }];
///
/// let first = generate_contacts(&seed, &groups).expect("generated");
/// let second = generate_contacts(&seed, &groups).expect("generated");
/// assert_eq!(first, second);
/// assert_eq!(first[0].role, "Leader");
/// ```
pub fn generate_contacts(
    seed_def: &SeedDefinition,
    groups: &[MembershipTemplate],
) -> Result<Vec<ExampleContactSeed>, GenerationError> {
    if groups.is_empty() {
        return Err(GenerationError::NoGroups);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed() ^ CONTACT_STREAM);
    let capacity = groups.iter().map(|g| g.member_count as usize).sum();
    let mut contacts = Vec::with_capacity(capacity);
    let mut next_id: u32 = 1;

    for group in groups {
        for position in 0..group.member_count {
            let role = if position == 0 { "Leader" } else { "Member" };
            contacts.push(generate_single_contact(&mut rng, next_id, group, role)?);
            next_id = next_id.saturating_add(1);
        }
    }

    Ok(contacts)
}

fn generate_single_contact(
    rng: &mut ChaCha8Rng,
    id: u32,
    group: &MembershipTemplate,
    role: &str,
) -> Result<ExampleContactSeed, GenerationError> {
    let first_name = generate_name_part(rng, |r| FirstName(EN).fake_with_rng(r))?;
    let last_name = generate_name_part(rng, |r| LastName(EN).fake_with_rng(r))?;

    let email = rng
        .random_ratio(EMAIL_NUMERATOR, 10)
        .then(|| email_for(&first_name, &last_name, id));
    let phone = format!(
        "+256 7{:02} {:03} {:03}",
        rng.random_range(0..100_u32),
        rng.random_range(0..1000_u32),
        rng.random_range(0..1000_u32)
    );
    let gender = if rng.random_bool(0.5) {
        GenderSeed::Male
    } else {
        GenderSeed::Female
    };
    let date_of_birth = rng
        .random_ratio(7, 10)
        .then(|| random_birth_date(rng))
        .flatten();
    let place_of_work = rng
        .random_ratio(1, 2)
        .then(|| pick(rng, WORKPLACES).to_owned());

    Ok(ExampleContactSeed {
        id,
        first_name,
        last_name,
        email,
        phone,
        gender,
        age_group: age_group_for(date_of_birth).unwrap_or_else(|| pick(rng, AGE_GROUPS)).to_owned(),
        date_of_birth,
        civil_status: pick(rng, CIVIL_STATUSES).to_owned(),
        place_of_work,
        group_id: group.group_id,
        role: role.to_owned(),
        country: group.country.clone(),
        district: group.district.clone(),
    })
}

/// Draws names until one passes validation.
fn generate_name_part(
    rng: &mut ChaCha8Rng,
    draw: impl Fn(&mut ChaCha8Rng) -> String,
) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let candidate = draw(rng);
        if is_valid_person_name(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::NameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

fn random_birth_date(rng: &mut ChaCha8Rng) -> Option<NaiveDate> {
    let year = rng.random_range(1960..=2006);
    let ordinal = rng.random_range(1..=365);
    NaiveDate::from_yo_opt(year, ordinal)
}

/// Age bracket as of the 2025 reference year used by the fixtures.
fn age_group_for(date_of_birth: Option<NaiveDate>) -> Option<&'static str> {
    let age = 2025 - date_of_birth?.year();
    let bracket = match age {
        i32::MIN..20 => "18-20",
        20..30 => "20-30",
        30..40 => "30-40",
        40..50 => "40-50",
        _ => "50+",
    };
    Some(bracket)
}

/// Pick one entry from a non-empty constant list.
pub(crate) fn pick<'a>(rng: &mut ChaCha8Rng, options: &[&'a str]) -> &'a str {
    let index = rng.random_range(0..options.len());
    options.get(index).copied().unwrap_or_default()
}
