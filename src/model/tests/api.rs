//! Tests for decoding backend error bodies.

use serde_json::json;

use crate::model::api::ErrorDto;

/// Tests extracting a plain detail message.
///
/// Expected: the message as sent by the backend
#[test]
fn extracts_plain_detail_message() {
    let dto: ErrorDto = serde_json::from_value(json!({ "detail": "Article not found" })).unwrap();

    assert_eq!(dto.message().as_deref(), Some("Article not found"));
}

/// Tests extracting the first message of a validation error list.
///
/// Expected: the `msg` of the first issue
#[test]
fn extracts_first_validation_message() {
    let dto: ErrorDto = serde_json::from_value(json!({
        "detail": [
            { "loc": ["body", "name"], "msg": "field required", "type": "value_error.missing" },
            { "loc": ["body", "manager_id"], "msg": "value is not a valid integer", "type": "type_error.integer" }
        ]
    }))
    .unwrap();

    assert_eq!(dto.message().as_deref(), Some("field required"));
}

/// Tests that unexpected detail shapes still decode.
///
/// Expected: no message, no decoding failure
#[test]
fn tolerates_unknown_detail_shape() {
    let dto: ErrorDto = serde_json::from_value(json!({ "detail": { "code": 17 } })).unwrap();

    assert_eq!(dto.message(), None);
}

/// Tests that a blank message is not surfaced.
///
/// Expected: None
#[test]
fn ignores_blank_message() {
    let dto: ErrorDto = serde_json::from_value(json!({ "detail": "  " })).unwrap();

    assert_eq!(dto.message(), None);
}
