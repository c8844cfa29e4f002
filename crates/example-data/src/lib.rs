//! Deterministic example data generation for the Zoe mock API.
//!
//! The mock server seeds a believable church dataset at startup. Random
//! choices (names, attendance figures, which weeks a group forgot to report)
//! are drawn from a ChaCha RNG seeded by a named entry in a JSON seed
//! registry, so the same seed always yields the same dataset.
//!
//! The crate is independent of backend domain types: callers describe the
//! groups to populate with plain templates and convert the generated seeds
//! into their own types at the point of use.
//!
//! # Example
//!
//! ```
//! use example_data::{MembershipTemplate, SeedRegistry, generate_contacts};
//!
//! let json = r#"{
//!     "version": 1,
//!     "seeds": [{"name": "test-seed", "seed": 42}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let groups = vec![MembershipTemplate {
//!     group_id: 100,
//!     member_count: 3,
//!     country: "Uganda".to_owned(),
//!     district: "Kampala".to_owned(),
//! }];
//! let contacts = generate_contacts(seed_def, &groups).expect("generation succeeds");
//!
//! assert_eq!(contacts.len(), 3);
//! ```

mod error;
mod generator;
mod registry;
mod schedule;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_contacts;
pub use registry::{SeedDefinition, SeedRegistry};
pub use schedule::{ReportTemplate, ScheduledGroup, generate_submission_history, monday_of_week};
pub use seed::{
    ExampleContactSeed, ExampleSubmissionSeed, GenderSeed, MembershipTemplate, SubmitterSeed,
};
pub use validation::{PERSON_NAME_MAX, email_for, is_valid_person_name};
