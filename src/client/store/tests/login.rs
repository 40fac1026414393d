//! Tests for sign_in and finish_sign_in

use scitrack_test_utils::prelude::*;

use super::{client, session};
use crate::client::{
    store::{
        login::{finish_sign_in, sign_in, LoginForm, LOGIN_FAILED},
        session::TokenStore,
        FormStatus,
    },
};

fn form(login: &str, password: &str) -> LoginForm {
    LoginForm {
        login: login.to_string(),
        password: password.to_string(),
    }
}

/// Tests a successful sign in.
///
/// Expected: token stored in the session and the store, navigate home
#[tokio::test]
async fn stores_token_on_success() {
    let test = TestBuilder::new()
        .with_login("anna", "secret", "token-1", 1)
        .build()
        .await;
    let (mut session, store) = session(None);
    let mut status = FormStatus::default();
    status.begin();

    let result = sign_in(&client(&test.url()), &form("anna", "secret")).await;

    assert!(finish_sign_in(result, &mut status, &mut session));
    assert_eq!(session.token(), Some("token-1"));
    assert_eq!(store.load().as_deref(), Some("token-1"));
    assert!(!status.submitting);
    test.assert_mocks().await;
}

/// Tests rejected credentials.
///
/// Expected: no token stored, generic message, no navigation
#[tokio::test]
async fn invalid_login_stores_nothing() {
    let test = TestBuilder::new().with_login_rejected(1).build().await;
    let (mut session, store) = session(None);
    let mut status = FormStatus::default();
    status.begin();

    let result = sign_in(&client(&test.url()), &form("anna", "wrong")).await;

    assert!(!finish_sign_in(result, &mut status, &mut session));
    assert_eq!(session.token(), None);
    assert_eq!(store.load(), None);
    assert_eq!(status.error.as_deref(), Some(LOGIN_FAILED));
    test.assert_mocks().await;
}

/// Tests an empty password.
///
/// Expected: no request sent, required fields message
#[tokio::test]
async fn empty_password_sends_nothing() {
    let test = TestBuilder::new().with_login_rejected(0).build().await;
    let (mut session, _) = session(None);
    let mut status = FormStatus::default();

    let result = sign_in(&client(&test.url()), &form("anna", "")).await;

    assert!(!finish_sign_in(result, &mut status, &mut session));
    assert_eq!(
        status.error.as_deref(),
        Some("Please fill in all required fields")
    );
    test.assert_mocks().await;
}
