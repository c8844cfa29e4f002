//! Tests for user account handlers.

use super::*;
use crate::domain::ports::UserRepositoryError;
use crate::inbound::http::test_utils::{TestPorts, account, member};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

fn test_app(
    ports: TestPorts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .service(
            web::scope("/api")
                .service(list_users)
                .service(create_user)
                .service(update_user),
        )
}

async fn send(ports: TestPorts, req: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(ports)).await;
    let res = actix_test::call_service(&app, req.to_request()).await;
    let status = res.status();
    (status, actix_test::read_body_json(res).await)
}

fn post_user(body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().uri("/api/users").set_json(body)
}

#[actix_web::test]
async fn lists_users_without_passwords() {
    let mut ports = TestPorts::default();
    ports.users.expect_list().returning(|| {
        Ok(vec![
            account(151, &[100], &[100, 20]),
            account(152, &[20], &[20, 10]),
            account(153, &[10], &[10]),
        ])
    });
    let (status, body) = send(
        ports,
        actix_test::TestRequest::get().uri("/api/users?limit=2"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["items"][0]["avatar"], "https://i.pravatar.cc/200?img=151");
    assert_eq!(body["items"][0]["isActive"], true);
    assert!(body["items"][0].get("password").is_none());
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["hasMore"], true);
}

#[rstest]
#[case::missing_contact(json!({"password": "secret"}), "contactId")]
#[case::missing_password(json!({"contactId": 4}), "password")]
#[case::blank_password(json!({"contactId": 4, "password": ""}), "password")]
#[actix_web::test]
async fn create_requires_contact_and_password(#[case] body: Value, #[case] field: &str) {
    let (status, payload) = send(TestPorts::default(), post_user(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["details"]["field"], field);
    assert_eq!(payload["details"]["code"], "missing_field");
}

#[actix_web::test]
async fn create_for_unknown_contact_is_not_found() {
    let mut ports = TestPorts::default();
    ports.contacts.expect_find().returning(|_| Ok(None));
    let (status, body) = send(
        ports,
        post_user(json!({"contactId": 999, "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "contact 999 not found");
}

#[actix_web::test]
async fn create_for_contact_with_account_conflicts() {
    let mut ports = TestPorts::default();
    ports
        .contacts
        .expect_find()
        .returning(|id| Ok(Some(member(id, "Grace", "Namukasa", 100))));
    ports
        .users
        .expect_create()
        .returning(|_, contact| Err(UserRepositoryError::conflict(contact.id)));
    let (status, body) = send(
        ports,
        post_user(json!({"contactId": 4, "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "conflict");
}

#[actix_web::test]
async fn create_passes_scope_through_and_returns_created() {
    let mut ports = TestPorts::default();
    ports
        .contacts
        .expect_find()
        .returning(|id| Ok(Some(member(id, "Grace", "Namukasa", 100))));
    ports
        .users
        .expect_create()
        .withf(|user, contact| {
            user.contact_id == 4
                && contact.id == 4
                && user.manage_group_ids == vec![GroupId::new(100)]
                && user.view_group_ids == vec![GroupId::new(100), GroupId::new(20)]
        })
        .returning(|_, _| Ok(account(158, &[100], &[100, 20])));
    let (status, body) = send(
        ports,
        post_user(json!({
            "contactId": 4,
            "password": "secret",
            "manageGroupIds": [100],
            "viewGroupIds": [100, 20]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 158);
}

#[actix_web::test]
async fn update_maps_rejected_scope_to_bad_request() {
    let mut ports = TestPorts::default();
    ports
        .users
        .expect_update()
        .withf(|id, patch| {
            *id == UserId::new(151) && patch.manage_group_ids == Some(vec![GroupId::new(30)])
        })
        .returning(|_, _| {
            Err(UserRepositoryError::rejected(
                "managed groups must also be viewable",
            ))
        });
    let (status, body) = send(
        ports,
        actix_test::TestRequest::patch()
            .uri("/api/users/151")
            .set_json(json!({"manageGroupIds": [30]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn update_unknown_user_is_not_found() {
    let mut ports = TestPorts::default();
    ports
        .users
        .expect_update()
        .returning(|id, _| Err(UserRepositoryError::not_found(id.get())));
    let (status, _) = send(
        ports,
        actix_test::TestRequest::patch()
            .uri("/api/users/999")
            .set_json(json!({"roles": ["Zone Leader"]})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
