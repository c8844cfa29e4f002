//! Hierarchy and access-scope properties over the seeded dataset.

mod support;

use std::collections::BTreeSet;

use actix_web::test as actix_test;
use serde_json::Value;
use support::{dataset, seeded_app};
use zoe_api::domain::{Group, GroupId, filter_visible};

#[actix_web::test]
async fn children_point_back_at_their_parent() {
    let app = actix_test::init_service(seeded_app()).await;
    let req = actix_test::TestRequest::get().uri("/api/groups").to_request();
    let groups: Value = actix_test::call_and_read_body_json(&app, req).await;
    let ids: Vec<u64> = groups["items"]
        .as_array()
        .expect("items")
        .iter()
        .filter_map(|group| group["id"].as_u64())
        .collect();
    assert_eq!(ids.len(), 66);
    assert_eq!(groups["summary"]["totalGroups"], 66);
    assert_eq!(groups["pagination"]["total"], 66);
    assert_eq!(groups["pagination"]["hasMore"], false);

    for id in ids {
        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/groups/{id}/children"))
            .to_request();
        let children: Value = actix_test::call_and_read_body_json(&app, req).await;
        for child in children["items"].as_array().expect("children") {
            assert_eq!(child["parentId"].as_u64(), Some(id));
        }
    }
}

#[test]
fn visible_groups_match_view_list_for_every_account() {
    let data = dataset();
    for user in &data.users {
        let visible: Vec<&Group> = filter_visible(data.groups.groups(), &user.scope);
        let visible_ids: BTreeSet<GroupId> = visible.iter().map(|group| group.id).collect();
        let expected: BTreeSet<GroupId> = user.scope.view_group_ids().iter().copied().collect();
        assert_eq!(visible_ids, expected, "user {}", user.username);

        let again = filter_visible(visible.clone(), &user.scope);
        assert_eq!(again, visible);
    }
}

#[test]
fn seeding_is_deterministic() {
    let first = dataset();
    let second = dataset();
    assert_eq!(first.contacts, second.contacts);
    assert_eq!(first.submissions, second.submissions);
}

#[actix_web::test]
async fn team_report_for_zone_leader_covers_zone_fellowships() {
    let app = actix_test::init_service(seeded_app()).await;
    let login = actix_test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({
            "username": "zone@worshipharvest.org",
            "password": "password123"
        }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, login).await;
    let token = body["token"].as_str().expect("token").to_owned();

    let req = actix_test::TestRequest::get()
        .uri("/api/reports/submissions/team")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let team: Value = actix_test::call_and_read_body_json(&app, req).await;
    let groups: Vec<u64> = team["items"]
        .as_array()
        .expect("items")
        .iter()
        .filter_map(|item| item["groupId"].as_u64())
        .collect();
    assert_eq!(groups, vec![100, 101, 102, 103, 104]);
    let total = team["summary"]["total"].as_u64().expect("total");
    let submitted = team["summary"]["submitted"].as_u64().expect("submitted");
    let overdue = team["summary"]["overdue"].as_u64().expect("overdue");
    assert_eq!(total, submitted + overdue);
}
