//! Organisational groups and their fixed category mapping.
//!
//! Groups form a six-level tree. The level of a group is fully determined by
//! its [`GroupType`]; the numeric category shown to clients is derived from
//! the same type so the two can never disagree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable numeric group identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(u32);

impl GroupId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for GroupId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Level of a group in the hierarchy, from the root down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    /// Global root.
    Movement,
    /// Continental network.
    Network,
    /// Forward Operating Base, a regional administrative grouping.
    Fob,
    /// A church location.
    Location,
    /// A zone within a location.
    Zone,
    /// Leaf-level small group ("Missional Community").
    Fellowship,
}

impl GroupType {
    /// Every type ordered from root to leaf.
    pub const ALL: [Self; 6] = [
        Self::Movement,
        Self::Network,
        Self::Fob,
        Self::Location,
        Self::Zone,
        Self::Fellowship,
    ];

    /// Depth in the tree; movements sit at 0 and fellowships at 5.
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Self::Movement => 0,
            Self::Network => 1,
            Self::Fob => 2,
            Self::Location => 3,
            Self::Zone => 4,
            Self::Fellowship => 5,
        }
    }

    /// The type one level up, or `None` for the root.
    #[must_use]
    pub const fn parent_type(self) -> Option<Self> {
        match self {
            Self::Movement => None,
            Self::Network => Some(Self::Movement),
            Self::Fob => Some(Self::Network),
            Self::Location => Some(Self::Fob),
            Self::Zone => Some(Self::Location),
            Self::Fellowship => Some(Self::Zone),
        }
    }

    /// Client-facing category identifier.
    #[must_use]
    pub const fn category_id(self) -> u32 {
        match self {
            Self::Fellowship => 1,
            Self::Zone => 2,
            Self::Location => 3,
            Self::Fob => 4,
            Self::Network => 5,
            Self::Movement => 6,
        }
    }

    /// Client-facing category name.
    #[must_use]
    pub const fn category_name(self) -> &'static str {
        match self {
            Self::Fellowship => "Missional Community",
            Self::Zone => "Zone",
            Self::Location => "Location",
            Self::Fob => "Forward Operating Base",
            Self::Network => "Network",
            Self::Movement => "Movement",
        }
    }

    /// Lower-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movement => "movement",
            Self::Network => "network",
            Self::Fob => "fob",
            Self::Location => "location",
            Self::Zone => "zone",
            Self::Fellowship => "fellowship",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a group type name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown group type: {0}")]
pub struct UnknownGroupType(pub String);

impl FromStr for GroupType {
    type Err = UnknownGroupType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownGroupType(s.to_owned()))
    }
}

/// Postal address attached to location groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Country name.
    pub country: String,
    /// District or city.
    pub district: String,
    /// Free-form street address.
    pub free_form: String,
}

/// A node of the organisational hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Unique identifier.
    pub id: GroupId,
    /// Display name.
    pub name: String,
    /// Hierarchy level.
    pub group_type: GroupType,
    /// Parent group; `None` only for roots.
    pub parent_id: Option<GroupId>,
    /// Visibility label such as `Public`.
    pub privacy: String,
    /// Free-text description.
    pub details: String,
    /// Number of members recorded against the group itself.
    pub member_count: u32,
    /// Street address, for locations.
    pub address: Option<Address>,
    /// Type-specific extras such as meeting day or region.
    pub meta_data: Option<Value>,
}

impl Group {
    /// Client-facing category identifier derived from the type.
    #[must_use]
    pub const fn category_id(&self) -> u32 {
        self.group_type.category_id()
    }

    /// Client-facing category name derived from the type.
    #[must_use]
    pub const fn category_name(&self) -> &'static str {
        self.group_type.category_name()
    }

    /// Members counted as active: 90% of the membership, rounded down.
    #[must_use]
    pub const fn active_members(&self) -> u32 {
        self.member_count.saturating_mul(9).div_euclid(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GroupType::Fellowship, 1, "Missional Community")]
    #[case(GroupType::Zone, 2, "Zone")]
    #[case(GroupType::Location, 3, "Location")]
    #[case(GroupType::Fob, 4, "Forward Operating Base")]
    #[case(GroupType::Network, 5, "Network")]
    #[case(GroupType::Movement, 6, "Movement")]
    fn category_mapping_is_fixed(
        #[case] kind: GroupType,
        #[case] id: u32,
        #[case] name: &str,
    ) {
        assert_eq!(kind.category_id(), id);
        assert_eq!(kind.category_name(), name);
    }

    #[rstest]
    fn parent_type_is_one_level_up() {
        for kind in GroupType::ALL {
            match kind.parent_type() {
                Some(parent) => assert_eq!(parent.depth() + 1, kind.depth()),
                None => assert_eq!(kind, GroupType::Movement),
            }
        }
    }

    #[rstest]
    #[case("fellowship", Some(GroupType::Fellowship))]
    #[case(" FOB ", Some(GroupType::Fob))]
    #[case("church", None)]
    fn parses_wire_names(#[case] raw: &str, #[case] expected: Option<GroupType>) {
        assert_eq!(raw.parse::<GroupType>().ok(), expected);
    }

    #[rstest]
    #[case(8, 7)]
    #[case(10, 9)]
    #[case(0, 0)]
    fn active_members_rounds_down(#[case] members: u32, #[case] expected: u32) {
        let group = Group {
            id: GroupId::new(100),
            name: "Phase MC".to_owned(),
            group_type: GroupType::Fellowship,
            parent_id: Some(GroupId::new(20)),
            privacy: "Public".to_owned(),
            details: String::new(),
            member_count: members,
            address: None,
            meta_data: None,
        };
        assert_eq!(group.active_members(), expected);
    }
}
