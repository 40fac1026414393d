//! Tests for Error::user_message

use crate::client::error::{ApiError, Error, ValidationError};

/// Tests the message of a client side validation failure.
///
/// Expected: the validation text, not the fallback
#[test]
fn validation_message_shown_verbatim() {
    let err = Error::from(ValidationError::ContributionSum(99.999));

    assert_eq!(
        err.user_message("fallback"),
        "Authors' contributions must add up to 100% (current total: 100%)"
    );
}

/// Tests backend failures with and without a detail.
///
/// Expected: the detail when present, the fallback otherwise
#[test]
fn api_message_prefers_detail() {
    let with_detail = Error::from(ApiError::Status {
        status: 400,
        detail: Some("Department exists".to_string()),
    });
    let without_detail = Error::from(ApiError::Status {
        status: 500,
        detail: None,
    });
    let transport = Error::from(ApiError::Transport("connection refused".to_string()));

    assert_eq!(with_detail.user_message("fallback"), "Department exists");
    assert_eq!(without_detail.user_message("fallback"), "fallback");
    assert_eq!(transport.user_message("fallback"), "fallback");
}
