//! Tests for the authentication endpoints of ApiClient

use scitrack_test_utils::prelude::*;
use serde_json::json;

use super::client;
use crate::{
    client::error::ApiError,
    model::user::{AccountKind, NewUser, Role},
};

fn new_user(login: &str) -> NewUser {
    NewUser {
        login: login.to_string(),
        password: "secret".to_string(),
        email: None,
        full_name: Some("Anna Petrova".to_string()),
        department: None,
    }
}

/// Tests a successful login.
///
/// Expected: Ok with the access token, credentials sent as a form
#[tokio::test]
async fn login_returns_token() {
    let test = TestBuilder::new()
        .with_login("anna", "secret", "token-1", 1)
        .build()
        .await;

    let response = client(&test.url()).login("anna", "secret").await.unwrap();

    assert_eq!(response.access_token, "token-1");
    test.assert_mocks().await;
}

/// Tests a rejected login.
///
/// Expected: Err with status 401
#[tokio::test]
async fn login_rejected() {
    let test = TestBuilder::new().with_login_rejected(1).build().await;

    let err = client(&test.url()).login("anna", "wrong").await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    test.assert_mocks().await;
}

/// Tests registering without a session.
///
/// Expected: anonymous POST with the JSON payload
#[tokio::test]
async fn registers_anonymously() {
    let test = TestBuilder::new()
        .with_endpoint(
            Endpoint::post("/auth/register")
                .anonymous()
                .json_body(json!({ "login": "anna", "password": "secret" }))
                .respond(200, factory::user(4, "anna", "user", Some("Anna Petrova"), None)),
        )
        .build()
        .await;

    let user = client(&test.url()).register(&new_user("anna")).await.unwrap();

    assert_eq!(user.role(), Role::User);
    test.assert_mocks().await;
}

/// Tests that optional fields left empty are not serialized.
///
/// Expected: no email or department keys in the body
#[test]
fn register_skips_missing_optionals() {
    let body = serde_json::to_value(new_user("anna")).unwrap();

    assert!(body.get("email").is_none());
    assert!(body.get("department").is_none());
    assert_eq!(body["full_name"], "Anna Petrova");
}

/// Tests creating a manager account as an administrator.
///
/// Expected: POST to the manager endpoint with the bearer token
#[tokio::test]
async fn creates_manager_account() {
    let test = TestBuilder::new()
        .with_endpoint(
            Endpoint::post("/auth/create-manager")
                .bearer("admin-token")
                .respond(200, factory::user(8, "boss", "manager", None, None)),
        )
        .build()
        .await;

    let user = client(&test.url())
        .with_token(Some("admin-token".to_string()))
        .create_account(AccountKind::Manager, &new_user("boss"))
        .await
        .unwrap();

    assert_eq!(user.role(), Role::Manager);
    test.assert_mocks().await;
}

/// Tests creating an account with a duplicate login.
///
/// Expected: Err carrying the backend detail
#[tokio::test]
async fn create_account_duplicate_login() {
    let test = TestBuilder::new()
        .with_error("POST", "/auth/create-user", 400, "Login already registered", 1)
        .build()
        .await;

    let result = client(&test.url())
        .create_account(AccountKind::User, &new_user("anna"))
        .await;

    assert_eq!(
        result,
        Err(ApiError::Status {
            status: 400,
            detail: Some("Login already registered".to_string()),
        })
    );
    test.assert_mocks().await;
}

/// Tests fetching the current user.
///
/// Expected: Ok with login and role
#[tokio::test]
async fn fetches_current_user() {
    let test = TestBuilder::new()
        .with_me(
            "token-1",
            factory::user(1, "root", "admin", Some("Root Admin"), None),
            1,
        )
        .build()
        .await;

    let user = client(&test.url())
        .with_token(Some("token-1".to_string()))
        .me()
        .await
        .unwrap();

    assert_eq!(user.role(), Role::Admin);
    assert_eq!(user.display_name(), "Root Admin");
    test.assert_mocks().await;
}

/// Tests listing users for the manager selector.
///
/// Expected: Ok with every user
#[tokio::test]
async fn lists_users() {
    let test = TestBuilder::new()
        .with_users(
            vec![
                factory::user(1, "root", "admin", None, Some("root@example.org")),
                factory::user(2, "boss", "manager", None, None),
            ],
            1,
        )
        .build()
        .await;

    let users = client(&test.url()).list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].option_label(), "root (root@example.org)");
    assert_eq!(users[1].option_label(), "boss (No name)");
    test.assert_mocks().await;
}
