//! Tests for the employee endpoints of ApiClient

use scitrack_test_utils::prelude::*;
use serde_json::json;

use super::client;
use crate::{client::error::ApiError, model::employee::NewEmployee};

fn new_employee() -> NewEmployee {
    NewEmployee {
        first_name: "Ivan".to_string(),
        last_name: "Ivanov".to_string(),
        middle_name: None,
        department_ids: vec![1, 3],
        position: Some("Researcher".to_string()),
        email: None,
        phone: None,
    }
}

/// Tests creating an employee linked to two departments.
///
/// Expected: Ok with the created summary
#[tokio::test]
async fn creates_employee() {
    let test = TestBuilder::new()
        .with_endpoint(
            Endpoint::post("/employees/with-details")
                .json_body(json!({
                    "first_name": "Ivan",
                    "last_name": "Ivanov",
                    "department_ids": [1, 3],
                    "position": "Researcher",
                }))
                .respond(200, json!({ "id": 12, "fio": "Ivanov Ivan" })),
        )
        .build()
        .await;

    let employee = client(&test.url())
        .create_employee(&new_employee())
        .await
        .unwrap();

    assert_eq!(employee.id, 12);
    test.assert_mocks().await;
}

/// Tests a validation failure reported by the backend.
///
/// Expected: Err carrying the first validation message
#[tokio::test]
async fn surfaces_validation_detail() {
    let test = TestBuilder::new()
        .with_endpoint(Endpoint::post("/employees/with-details").respond(
            422,
            json!({ "detail": [{ "loc": ["body", "email"], "msg": "value is not a valid email address" }] }),
        ))
        .build()
        .await;

    let result = client(&test.url()).create_employee(&new_employee()).await;

    assert_eq!(
        result,
        Err(ApiError::Status {
            status: 422,
            detail: Some("value is not a valid email address".to_string()),
        })
    );
    test.assert_mocks().await;
}
