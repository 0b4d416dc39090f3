use crate::modules::users::core::profile::RegistryProfile;
use crate::tests::fixtures::http::TestApi;
use axum::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn api() -> TestApi {
    TestApi::new(&RegistryProfile::roster())
}

#[rstest]
#[tokio::test]
async fn get_users_returns_the_wrapped_list(api: TestApi) {
    let response = api.get("/api/users").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.is_json());
    let users = response.body["users"]
        .as_array()
        .expect("users should be an array");
    assert_eq!(users.len(), 3);
    assert!(users[0].get("id").is_some());
    assert!(users[0].get("name").is_some());
}

#[rstest]
#[tokio::test]
async fn post_user_creates_a_name_only_user(api: TestApi) {
    let response = api.post_json("/api/users", &json!({"name": "Dave"})).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.is_json());
    assert_eq!(response.body, json!({"id": 4, "name": "Dave"}));
}

#[rstest]
#[tokio::test]
async fn post_user_returns_400_if_name_is_missing(api: TestApi) {
    let response = api
        .post_json("/api/users", &json!({"email": "test@example.com"}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.is_json());
    assert_eq!(response.body["error"], "Name is required");
}

#[rstest]
#[tokio::test]
async fn get_user_by_id_finds_a_created_user(api: TestApi) {
    api.post_json("/api/users", &json!({"name": "Dave"})).await;

    let response = api.get("/api/users/4").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"id": 4, "name": "Dave"}));
}
