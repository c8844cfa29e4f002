//! The organisational hierarchy served by the mock API.

use serde_json::json;

use crate::domain::{Address, Group, GroupId, GroupType};

const MEETING_DAYS: [&str; 4] = ["Monday", "Tuesday", "Wednesday", "Thursday"];

/// `(id, name, parent zone, member count)` for every fellowship.
const FELLOWSHIPS: &[(u32, &str, u32, u32)] = &[
    (100, "Phase MC", 20, 8),
    (101, "Grace & Truth MC", 20, 6),
    (102, "Victory MC", 20, 7),
    (103, "Overflow MC", 20, 5),
    (104, "Brave MC", 20, 6),
    (105, "Hope MC", 21, 5),
    (106, "Faith MC", 21, 6),
    (107, "Love MC", 21, 4),
    (108, "Joy MC", 21, 5),
    (109, "Peace MC", 21, 5),
    (110, "Kingdom MC", 22, 6),
    (111, "Lighthouse MC", 22, 5),
    (112, "Harvest MC", 22, 4),
    (113, "Salt & Light MC", 22, 5),
    (114, "Living Water MC", 22, 5),
    (115, "Fire MC", 23, 4),
    (116, "Glory MC", 23, 5),
    (117, "Remnant MC", 23, 4),
    (118, "Pioneer MC", 23, 5),
    (119, "Bread of Life MC", 23, 4),
    (120, "New Hope MC Kigali", 24, 3),
    (121, "Redeemed MC", 24, 3),
    (122, "Chosen MC", 24, 2),
    (123, "Blessed MC", 24, 3),
    (124, "Covenant MC", 25, 3),
    (125, "Promise MC", 25, 2),
    (126, "Faithful MC", 25, 3),
    (127, "Destiny MC", 25, 2),
    (128, "Breakthrough MC", 26, 3),
    (129, "Victory Nairobi MC", 26, 3),
    (130, "Restoration MC", 26, 2),
    (131, "Fresh Fire MC", 26, 3),
    (132, "Champions MC", 27, 3),
    (133, "Warriors MC", 27, 2),
    (134, "Ambassadors MC", 27, 3),
    (135, "Eagles MC", 27, 3),
    (136, "Rising Stars MC", 28, 2),
    (137, "New Generation MC", 28, 3),
    (138, "Heritage MC", 28, 2),
    (139, "Legacy MC", 28, 3),
    (140, "Berlin Believers MC", 29, 2),
    (141, "Deutschland MC", 29, 2),
    (142, "New Life Berlin MC", 29, 2),
    (143, "City Center MC", 30, 2),
    (144, "Crossroads MC", 30, 2),
    (145, "Gateway MC", 30, 2),
];

/// `(id, name, parent location, details)` for every zone.
const ZONES: &[(u32, &str, u32, &str)] = &[
    (20, "North Zone Kampala", 10, "North Kampala zone covering Ntinda, Nakawa"),
    (21, "South Zone Kampala", 10, "South Kampala zone"),
    (22, "Central Zone Kampala", 10, "Central Kampala zone"),
    (23, "East Zone Kampala", 10, "East Kampala zone"),
    (24, "Kimihurura Zone", 11, "Kimihurura area zone"),
    (25, "Nyarutarama Zone", 11, "Nyarutarama area zone"),
    (26, "Kilimani Zone", 12, "Kilimani area zone"),
    (27, "Westlands Zone", 12, "Westlands area zone"),
    (28, "Eastlands Zone", 12, "Eastlands area zone"),
    (29, "Prenzlauer Berg Zone", 13, "Prenzlauer Berg area"),
    (30, "Mitte Zone", 13, "Mitte district"),
];

struct LocationFixture {
    id: u32,
    name: &'static str,
    parent: u32,
    details: &'static str,
    country: &'static str,
    district: &'static str,
    free_form: &'static str,
}

const LOCATIONS: &[LocationFixture] = &[
    LocationFixture {
        id: 10,
        name: "Kampala Location",
        parent: 4,
        details: "Main Kampala church location",
        country: "Uganda",
        district: "Kampala",
        free_form: "Plot 15, Ntinda Road",
    },
    LocationFixture {
        id: 11,
        name: "Kigali Location",
        parent: 4,
        details: "Kigali church location",
        country: "Rwanda",
        district: "Kigali",
        free_form: "KN 3 Ave, Kimihurura",
    },
    LocationFixture {
        id: 12,
        name: "Nairobi Location",
        parent: 4,
        details: "Nairobi church location",
        country: "Kenya",
        district: "Nairobi",
        free_form: "Ngong Road, Kilimani",
    },
    LocationFixture {
        id: 13,
        name: "Berlin Location",
        parent: 5,
        details: "Berlin church location",
        country: "Germany",
        district: "Berlin",
        free_form: "Prenzlauer Allee 123",
    },
];

fn group(
    id: u32,
    name: &str,
    group_type: GroupType,
    parent: Option<u32>,
    details: &str,
    member_count: u32,
) -> Group {
    Group {
        id: GroupId::new(id),
        name: name.to_owned(),
        group_type,
        parent_id: parent.map(GroupId::new),
        privacy: "Public".to_owned(),
        details: details.to_owned(),
        member_count,
        address: None,
        meta_data: None,
    }
}

/// Every group, ordered from the movement down to the fellowships.
///
/// Only fellowships record members; higher levels report zero, as the
/// front end derives their totals from descendants.
#[must_use]
pub fn hierarchy_groups() -> Vec<Group> {
    let mut groups = vec![
        group(
            1,
            "Worship Harvest Global",
            GroupType::Movement,
            None,
            "Global movement spanning multiple continents",
            0,
        ),
        group(2, "Africa Network", GroupType::Network, Some(1), "African church network", 0),
        group(3, "Europe Network", GroupType::Network, Some(1), "European church network", 0),
        Group {
            meta_data: Some(json!({ "region": "East Africa" })),
            ..group(
                4,
                "East Africa FOB",
                GroupType::Fob,
                Some(2),
                "East African forward operating base",
                0,
            )
        },
        Group {
            meta_data: Some(json!({ "region": "Western Europe" })),
            ..group(
                5,
                "Western Europe FOB",
                GroupType::Fob,
                Some(3),
                "Western European base",
                0,
            )
        },
    ];

    groups.extend(LOCATIONS.iter().map(|location| Group {
        address: Some(Address {
            country: location.country.to_owned(),
            district: location.district.to_owned(),
            free_form: location.free_form.to_owned(),
        }),
        ..group(
            location.id,
            location.name,
            GroupType::Location,
            Some(location.parent),
            location.details,
            0,
        )
    }));

    groups.extend(ZONES.iter().map(|&(id, name, parent, details)| {
        group(id, name, GroupType::Zone, Some(parent), details, 0)
    }));

    groups.extend(FELLOWSHIPS.iter().map(|&(id, name, parent, members)| {
        let meeting_day = MEETING_DAYS
            .get(id as usize % MEETING_DAYS.len())
            .copied()
            .unwrap_or("Monday");
        Group {
            meta_data: Some(json!({ "meetingDay": meeting_day, "meetingTime": "19:00" })),
            ..group(
                id,
                name,
                GroupType::Fellowship,
                Some(parent),
                "Weekly fellowship meeting",
                members,
            )
        }
    }));

    groups
}
