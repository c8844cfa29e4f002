//! Seed registry types and JSON parsing.
//!
//! The registry names the RNG seeds a deployment may start from, so an
//! operator can pick `harvest-default` or a variant without recompiling.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A seed registry containing named seed definitions.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "seeds": [{"name": "test", "seed": 42}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the JSON is malformed, the version is
    /// unsupported, the seeds array is empty, or a seed name repeats.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut names = HashSet::new();
        for seed in &raw.seeds {
            if !names.insert(seed.name.as_str()) {
                return Err(RegistryError::DuplicateSeedName {
                    name: seed.name.clone(),
                });
            }
        }

        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| SeedDefinition {
                name: s.name,
                seed: s.seed,
            })
            .collect();

        Ok(Self {
            version: raw.version,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named RNG seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
}

impl SeedDefinition {
    /// Build a definition directly, bypassing the registry.
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            seed,
        }
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    seeds: Vec<RawSeedDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "seeds": [
            {"name": "harvest-default", "seed": 2026},
            {"name": "harvest-sparse", "seed": 1234}
        ]
    }"#;

    #[test]
    fn parses_valid_registry() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");

        assert_eq!(registry.version(), 1);
        assert_eq!(registry.seeds().len(), 2);
    }

    #[test]
    fn finds_seed_by_name() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let seed = registry.find_seed("harvest-sparse").expect("seed exists");

        assert_eq!(seed.name(), "harvest-sparse");
        assert_eq!(seed.seed(), 1234);
    }

    #[test]
    fn missing_seed_is_reported() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let err = registry.find_seed("nope").expect_err("seed is absent");

        assert_eq!(
            err,
            RegistryError::SeedNotFound {
                name: "nope".to_owned()
            }
        );
    }

    #[rstest]
    #[case(r#"{"version": 2, "seeds": [{"name": "a", "seed": 1}]}"#, RegistryError::UnsupportedVersion { expected: 1, actual: 2 })]
    #[case(r#"{"version": 1, "seeds": []}"#, RegistryError::EmptySeeds)]
    #[case(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1}, {"name": "a", "seed": 2}]}"#,
        RegistryError::DuplicateSeedName { name: "a".to_owned() }
    )]
    fn rejects_invalid_registries(#[case] json: &str, #[case] expected: RegistryError) {
        assert_eq!(SeedRegistry::from_json(json), Err(expected));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SeedRegistry::from_json("{not json").expect_err("malformed");
        assert!(matches!(err, RegistryError::ParseError { .. }));
    }
}
