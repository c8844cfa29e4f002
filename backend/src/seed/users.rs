//! Test accounts, one per level of the hierarchy.

use crate::domain::{GroupId, User, UserId, UserParts, UserValidationError};

/// Password shared by every test account.
pub const TEST_PASSWORD: &str = "password123";

struct AccountFixture {
    id: u32,
    username: &'static str,
    full_name: &'static str,
    role: &'static str,
    permissions: &'static [&'static str],
    manage: &'static [u32],
    view: &'static [u32],
}

const LEADER_PERMISSIONS: &[&str] = &[
    "REPORT_VIEW",
    "REPORT_SUBMIT",
    "REPORT_VIEW_SUBMISSIONS",
    "CRM_VIEW",
    "CRM_EDIT",
    "GROUP_VIEW",
    "GROUP_EDIT",
];

const KAMPALA_MANAGED: &[u32] = &[
    10, 20, 21, 22, 23, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119,
];
const KAMPALA_VIEWED: &[u32] = &[
    10, 20, 21, 22, 23, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 4,
];

const ACCOUNTS: &[AccountFixture] = &[
    AccountFixture {
        id: 151,
        username: "fellowship@worshipharvest.org",
        full_name: "Emmanuel Okello",
        role: "MC Shepherd",
        permissions: &["REPORT_VIEW", "REPORT_SUBMIT", "CRM_VIEW", "CRM_EDIT"],
        manage: &[100],
        view: &[100, 20],
    },
    AccountFixture {
        id: 152,
        username: "zone@worshipharvest.org",
        full_name: "Zone Leader North",
        role: "Zone Leader",
        permissions: &[
            "REPORT_VIEW",
            "REPORT_SUBMIT",
            "REPORT_VIEW_SUBMISSIONS",
            "CRM_VIEW",
            "CRM_EDIT",
            "GROUP_VIEW",
        ],
        manage: &[20, 100, 101, 102, 103, 104],
        view: &[20, 100, 101, 102, 103, 104, 10],
    },
    AccountFixture {
        id: 153,
        username: "location@worshipharvest.org",
        full_name: "Location Pastor Kampala",
        role: "Location Pastor",
        permissions: LEADER_PERMISSIONS,
        manage: KAMPALA_MANAGED,
        view: KAMPALA_VIEWED,
    },
    AccountFixture {
        id: 154,
        username: "fob@worshipharvest.org",
        full_name: "FOB Leader East Africa",
        role: "FOB Leader",
        permissions: LEADER_PERMISSIONS,
        manage: &[4, 10, 11, 12],
        view: &[4, 10, 11, 12, 2],
    },
    AccountFixture {
        id: 155,
        username: "network@worshipharvest.org",
        full_name: "Network Leader Africa",
        role: "Network Leader",
        permissions: &[
            "REPORT_VIEW",
            "REPORT_SUBMIT",
            "REPORT_VIEW_SUBMISSIONS",
            "CRM_VIEW",
            "CRM_EDIT",
            "GROUP_VIEW",
            "GROUP_EDIT",
            "USER_VIEW",
        ],
        manage: &[2, 4, 10, 11, 12],
        view: &[2, 4, 10, 11, 12, 1],
    },
    AccountFixture {
        id: 156,
        username: "movement@worshipharvest.org",
        full_name: "Movement Leader Global",
        role: "Movement Leader",
        permissions: &[
            "REPORT_VIEW",
            "REPORT_SUBMIT",
            "REPORT_VIEW_SUBMISSIONS",
            "CRM_VIEW",
            "CRM_EDIT",
            "GROUP_VIEW",
            "GROUP_EDIT",
            "USER_VIEW",
            "USER_EDIT",
        ],
        manage: &[1, 2, 3, 4, 5],
        view: &[1, 2, 3, 4, 5],
    },
    AccountFixture {
        id: 157,
        username: "admin@worshipharvest.org",
        full_name: "System Administrator",
        role: "RoleAdmin",
        permissions: &[
            "ROLE_EDIT",
            "USER_VIEW",
            "USER_EDIT",
            "GROUP_EDIT",
            "GROUP_VIEW",
            "EVENT_EDIT",
            "EVENT_VIEW",
            "REPORT_VIEW_SUBMISSIONS",
            "DASHBOARD",
            "CRM_VIEW",
            "CRM_EDIT",
            "TAG_VIEW",
            "TAG_EDIT",
            "REPORT_VIEW",
            "REPORT_EDIT",
            "REPORT_SUBMIT",
        ],
        manage: &[1, 2, 3, 4, 5],
        view: &[1, 2, 3, 4, 5],
    },
];

fn group_ids(raw: &[u32]) -> Vec<GroupId> {
    raw.iter().copied().map(GroupId::new).collect()
}

fn owned(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|value| (*value).to_owned()).collect()
}

/// Build the test accounts, all linked to contact 1.
pub fn test_users() -> Result<Vec<User>, UserValidationError> {
    ACCOUNTS
        .iter()
        .map(|account| {
            User::try_from_parts(UserParts {
                id: UserId::new(account.id),
                username: account.username.to_owned(),
                password: TEST_PASSWORD.to_owned(),
                contact_id: 1,
                full_name: account.full_name.to_owned(),
                email: account.username.to_owned(),
                roles: vec![account.role.to_owned()],
                permissions: owned(account.permissions),
                manage_group_ids: group_ids(account.manage),
                view_group_ids: group_ids(account.view),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_account_has_a_consistent_scope() {
        let users = test_users().expect("fixtures are valid");
        assert_eq!(users.len(), 7);
        assert!(users.iter().all(|user| user.password_matches(TEST_PASSWORD)));
    }

    #[rstest]
    fn fellowship_leader_manages_phase_mc_only() {
        let users = test_users().expect("fixtures are valid");
        let leader = users
            .iter()
            .find(|user| user.username == "fellowship@worshipharvest.org")
            .expect("leader present");
        assert_eq!(leader.scope.manage_group_ids(), &[GroupId::new(100)]);
    }
}
