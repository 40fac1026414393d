//! Tests for decode_claims

use scitrack_test_utils::jwt;

use crate::client::{error::TokenError, store::token::decode_claims};

/// Tests decoding a signed token issued by the backend.
///
/// Expected: sub and role read without verifying the signature
#[test]
fn decodes_signed_token() {
    let token = jwt::create_token("Anna Petrova", Some("manager")).unwrap();

    let claims = decode_claims(&token).unwrap();

    assert_eq!(claims.sub.as_deref(), Some("Anna Petrova"));
    assert_eq!(claims.role.as_deref(), Some("manager"));
}

/// Tests a token whose payload has no role.
///
/// Expected: Ok with role None
#[test]
fn missing_role_is_none() {
    let token = jwt::token_with_payload(r#"{"sub":"anna"}"#);

    let claims = decode_claims(&token).unwrap();

    assert_eq!(claims.role, None);
}

/// Tests a padded payload segment.
///
/// Expected: padding is accepted
#[test]
fn accepts_padded_payload() {
    let unpadded = "header.eyJzdWIiOiJhIn0.signature";
    let padded = "header.eyJzdWIiOiJhIn0=.signature";

    assert_eq!(decode_claims(unpadded).unwrap().sub.as_deref(), Some("a"));
    assert_eq!(decode_claims(padded).unwrap().sub.as_deref(), Some("a"));
}

/// Tests a value that is not a token at all.
///
/// Expected: Err(TokenError::MissingPayload)
#[test]
fn rejects_missing_payload() {
    assert_eq!(
        decode_claims(&jwt::malformed_token()),
        Err(TokenError::MissingPayload)
    );
}

/// Tests a payload that is not valid base64.
///
/// Expected: Err(TokenError::Base64)
#[test]
fn rejects_invalid_base64() {
    assert!(matches!(
        decode_claims("header.%%%.signature"),
        Err(TokenError::Base64(_))
    ));
}

/// Tests a payload that decodes to something other than JSON.
///
/// Expected: Err(TokenError::Claims)
#[test]
fn rejects_non_json_payload() {
    let token = jwt::token_with_payload("not json");

    assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
}
