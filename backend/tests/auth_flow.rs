//! Login, session and bearer behaviour against the seeded dataset.

mod support;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};
use support::seeded_app;

fn login_request(username: &str, password: &str) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": username, "password": password }))
}

#[rstest]
#[case("fellowship@worshipharvest.org", json!([100]))]
#[case("zone@worshipharvest.org", json!([20, 100, 101, 102, 103, 104]))]
#[actix_web::test]
async fn login_reports_managed_groups(#[case] username: &str, #[case] expected: Value) {
    let app = actix_test::init_service(seeded_app()).await;
    let res = actix_test::call_service(&app, login_request(username, "password123").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["hierarchy"]["canManageGroupIds"], expected);
    assert!(body["token"].as_str().is_some_and(|token| token.starts_with("mock_jwt_")));
}

#[actix_web::test]
async fn wrong_password_yields_no_token() {
    let app = actix_test::init_service(seeded_app()).await;
    let res = actix_test::call_service(
        &app,
        login_request("fellowship@worshipharvest.org", "letmein").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().contains_key("trace-id"));
    let body: Value = actix_test::read_body_json(res).await;
    assert!(body.get("token").is_none());
    assert_eq!(body["code"], "unauthorized");
}

#[actix_web::test]
async fn session_cookie_scopes_my_groups() {
    let app = actix_test::init_service(seeded_app()).await;
    let res = actix_test::call_service(
        &app,
        login_request("fellowship@worshipharvest.org", "password123").to_request(),
    )
    .await;
    let cookie = res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned();

    let req = actix_test::TestRequest::get()
        .uri("/api/groups/me")
        .cookie(cookie)
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    let ids: Vec<u64> = body["items"]
        .as_array()
        .expect("items")
        .iter()
        .filter_map(|group| group["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![100]);
    assert_eq!(body["items"][0]["role"], "Leader");
}

#[actix_web::test]
async fn bearer_token_selects_user() {
    let app = actix_test::init_service(seeded_app()).await;
    let login: Value = actix_test::call_and_read_body_json(
        &app,
        login_request("zone@worshipharvest.org", "password123").to_request(),
    )
    .await;
    let token = login["token"].as_str().expect("token").to_owned();
    let zone_user_id = login["user"]["id"].clone();

    let req = actix_test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header((AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let me: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["id"], zone_user_id);
}

#[actix_web::test]
async fn anonymous_requests_act_as_first_account() {
    let app = actix_test::init_service(seeded_app()).await;
    let req = actix_test::TestRequest::get().uri("/api/auth/me").to_request();
    let me: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["username"], "fellowship@worshipharvest.org");
}
