use crate::modules::users::core::profile::RegistryProfile;
use crate::tests::fixtures::http::TestApi;
use axum::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn api() -> TestApi {
    TestApi::new(&RegistryProfile::directory())
}

#[rstest]
#[tokio::test]
async fn get_users_returns_all_seeded_users(api: TestApi) {
    let response = api.get("/api/users").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.is_json());
    let users = response.body.as_array().expect("body should be an array");
    assert!(!users.is_empty());
    for field in ["id", "name", "email"] {
        assert!(users[0].get(field).is_some(), "missing {field}");
    }
}

#[rstest]
#[tokio::test]
async fn get_user_by_id_returns_that_user(api: TestApi) {
    let response = api.get("/api/users/1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["name"], "John Doe");
    assert_eq!(response.body["email"], "john@example.com");
}

#[rstest]
#[tokio::test]
async fn get_user_by_id_returns_404_for_a_missing_user(api: TestApi) {
    let response = api.get("/api/users/999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.is_json());
    assert_eq!(response.body["message"], "User not found");
}

#[rstest]
#[tokio::test]
async fn post_user_creates_and_lists_the_new_user(api: TestApi) {
    let new_user = json!({"name": "Bob Johnson", "email": "bob@example.com"});

    let response = api.post_json("/api/users", &new_user).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 3);
    assert_eq!(response.body["name"], "Bob Johnson");
    assert_eq!(response.body["email"], "bob@example.com");

    let listed = api.get("/api/users").await;
    let users = listed.body.as_array().expect("body should be an array");
    assert_eq!(users.len(), 3);
    assert!(
        users
            .iter()
            .any(|u| u["name"] == new_user["name"] && u["email"] == new_user["email"])
    );
}

#[rstest]
#[tokio::test]
async fn post_user_returns_400_for_invalid_data(api: TestApi) {
    let response = api.post_json("/api/users", &json!({"name": ""})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.is_json());
    assert_eq!(response.body["error"], "Name is required");
    assert_eq!(api.get("/api/users").await.body.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[tokio::test]
async fn scenarios_do_not_share_state() {
    let first = TestApi::new(&RegistryProfile::directory());
    first
        .post_json(
            "/api/users",
            &json!({"name": "Bob Johnson", "email": "bob@example.com"}),
        )
        .await;

    let second = TestApi::new(&RegistryProfile::directory());
    assert_eq!(second.state.registry.list().await.len(), 2);
    assert_eq!(first.state.registry.list().await.len(), 3);
}
