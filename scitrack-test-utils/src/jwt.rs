//! Session tokens for tests.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::error::TestError;

pub static TEST_SECRET: &[u8] = b"scitrack-test-secret";

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    exp: i64,
}

/// Creates an HS256 token like the ones issued by the backend's token endpoint.
pub fn create_token(sub: &str, role: Option<&str>) -> Result<String, TestError> {
    let claims = TestClaims {
        sub,
        role,
        exp: (Utc::now() + Duration::minutes(30)).timestamp(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )?)
}

/// A token whose payload segment is `payload` verbatim, base64url encoded.
pub fn token_with_payload(payload: &str) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload)
    )
}

/// A token with no payload segment at all.
pub fn malformed_token() -> String {
    "not-a-jwt".to_string()
}
