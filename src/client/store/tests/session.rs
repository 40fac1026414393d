//! Tests for Session and resolve_session
//!
//! These tests verify:
//! - Login persists the token and logout clears it
//! - A decodable token is resolved without calling the backend
//! - An undecodable token falls back to /auth/me
//! - A token rejected by /auth/me logs the session out
//! - Resolutions for a token that has since changed are ignored

use scitrack_test_utils::prelude::*;

use super::{client, session};
use crate::{
    client::store::session::{resolve_session, Resolution, SessionUser, TokenStore},
    model::user::Role,
};

/// Tests restoring a persisted token.
///
/// Expected: token present, user unresolved
#[test]
fn restores_persisted_token() {
    let (session, _) = session(Some("abc"));

    assert_eq!(session.token(), Some("abc"));
    assert!(session.is_authenticated());
    assert!(session.user().is_none());
}

/// Tests the login and logout lifecycle.
///
/// Expected: login persists the token, logout removes it from the store
#[test]
fn login_then_logout() {
    let (mut session, store) = session(None);

    session.login("token-1".to_string());
    assert_eq!(store.load().as_deref(), Some("token-1"));
    assert_eq!(session.token(), Some("token-1"));

    session.logout();
    assert_eq!(store.load(), None);
    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
}

/// Tests resolving without a token.
///
/// Expected: Anonymous, no request sent
#[tokio::test]
async fn anonymous_without_token() {
    let test = TestBuilder::new().with_me_rejected(0).build().await;

    let resolution = resolve_session(None, &client(&test.url())).await;

    assert_eq!(resolution, Resolution::Anonymous);
    test.assert_mocks().await;
}

/// Tests resolving a decodable token.
///
/// Expected: Decoded from the claims, /auth/me never called
#[tokio::test]
async fn decodes_without_network() {
    let token = jwt::create_token("Root Admin", Some("admin")).unwrap();
    let test = TestBuilder::new().with_me_rejected(0).build().await;

    let resolution = resolve_session(Some(&token), &client(&test.url())).await;

    assert_eq!(
        resolution,
        Resolution::Decoded(SessionUser {
            name: "Root Admin".to_string(),
            role: Role::Admin,
        })
    );
    test.assert_mocks().await;
}

/// Tests a decodable token without a subject.
///
/// Expected: the default display name and the user role
#[tokio::test]
async fn decoded_defaults() {
    let token = jwt::token_with_payload("{}");

    let resolution = resolve_session(Some(&token), &client("http://127.0.0.1:9")).await;

    assert_eq!(
        resolution,
        Resolution::Decoded(SessionUser {
            name: "User".to_string(),
            role: Role::User,
        })
    );
}

/// Tests falling back to the backend for an opaque token.
///
/// Expected: Fetched with the full name and role from /auth/me
#[tokio::test]
async fn falls_back_to_me() {
    let token = jwt::malformed_token();
    let test = TestBuilder::new()
        .with_me(
            &token,
            factory::user(2, "boss", "manager", Some("Boris Bossov"), None),
            1,
        )
        .build()
        .await;

    let resolution = resolve_session(Some(&token), &client(&test.url())).await;

    assert_eq!(
        resolution,
        Resolution::Fetched(SessionUser {
            name: "Boris Bossov".to_string(),
            role: Role::Manager,
        })
    );
    test.assert_mocks().await;
}

/// Tests an opaque token that the backend rejects.
///
/// Expected: Revoked, and applying it clears the stored token
#[tokio::test]
async fn revoked_token_logs_out() {
    let token = jwt::malformed_token();
    let test = TestBuilder::new().with_me_rejected(1).build().await;
    let (mut session, store) = session(Some(&token));

    let resolution = resolve_session(session.token(), &client(&test.url())).await;
    assert_eq!(resolution, Resolution::Revoked);

    assert!(session.apply(Some(&token), resolution));
    assert!(!session.is_authenticated());
    assert_eq!(store.load(), None);
    test.assert_mocks().await;
}

/// Tests a resolution that arrives after the user signed in again.
///
/// Expected: ignored, the new token is kept
#[test]
fn ignores_resolution_for_replaced_token() {
    let (mut session, store) = session(Some("old"));
    session.login("new".to_string());

    assert!(!session.apply(Some("old"), Resolution::Revoked));
    assert_eq!(session.token(), Some("new"));
    assert_eq!(store.load().as_deref(), Some("new"));
}
