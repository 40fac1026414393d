//! Tests for the department endpoints of ApiClient

use scitrack_test_utils::prelude::*;
use serde_json::json;

use super::client;
use crate::model::department::DepartmentPayload;

/// Tests listing departments with nested employees.
///
/// Expected: Ok with employees decoded
#[tokio::test]
async fn lists_departments() {
    let test = TestBuilder::new()
        .with_departments(
            vec![
                factory::department(1, "Physics", Some(2), &[(5, "Ivanov Ivan")]),
                factory::department(2, "Chemistry", None, &[]),
            ],
            1,
        )
        .build()
        .await;

    let departments = client(&test.url()).list_departments().await.unwrap();

    assert_eq!(departments.len(), 2);
    assert_eq!(departments[0].employees[0].fio, "Ivanov Ivan");
    assert_eq!(departments[1].manager_id, None);
    test.assert_mocks().await;
}

/// Tests updating a department.
///
/// Expected: PUT with name and manager_id, decoded response
#[tokio::test]
async fn updates_department() {
    let test = TestBuilder::new()
        .with_endpoint(
            Endpoint::put("/departments/4")
                .json_body(json!({ "name": "Optics", "manager_id": 9 }))
                .respond(200, factory::department(4, "Optics", Some(9), &[])),
        )
        .build()
        .await;

    let payload = DepartmentPayload {
        name: "Optics".to_string(),
        manager_id: Some(9),
    };
    let department = client(&test.url())
        .update_department(4, &payload)
        .await
        .unwrap();

    assert_eq!(department.manager_id, Some(9));
    test.assert_mocks().await;
}

/// Tests creating a department without a manager.
///
/// Expected: manager_id sent as null
#[tokio::test]
async fn creates_department_without_manager() {
    let test = TestBuilder::new()
        .with_endpoint(
            Endpoint::post("/departments/")
                .json_body(json!({ "name": "Optics", "manager_id": null }))
                .respond(200, factory::department(5, "Optics", None, &[])),
        )
        .build()
        .await;

    let payload = DepartmentPayload {
        name: "Optics".to_string(),
        manager_id: None,
    };
    let result = client(&test.url()).create_department(&payload).await;

    assert!(result.is_ok(), "Error: {:#?}", result);
    test.assert_mocks().await;
}

/// Tests deleting a department.
///
/// Expected: Ok regardless of the response body
#[tokio::test]
async fn deletes_department() {
    let test = TestBuilder::new().with_department_delete(3, 1).build().await;

    let result = client(&test.url()).delete_department(3).await;

    assert!(result.is_ok(), "Error: {:#?}", result);
    test.assert_mocks().await;
}

/// Tests a delete rejected by the backend.
///
/// Expected: Err with status 403
#[tokio::test]
async fn delete_forbidden() {
    let test = TestBuilder::new()
        .with_error("DELETE", "/departments/3", 403, "Not enough permissions", 1)
        .build()
        .await;

    let err = client(&test.url()).delete_department(3).await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message("Failed"), "Not enough permissions");
    test.assert_mocks().await;
}

/// Tests fetching a single department.
///
/// Expected: Ok with the full employee list
#[tokio::test]
async fn gets_department() {
    let test = TestBuilder::new()
        .with_endpoint(Endpoint::get("/departments/2").respond(
            200,
            factory::department(2, "Chemistry", Some(4), &[(1, "A"), (2, "B"), (3, "C"), (4, "D")]),
        ))
        .build()
        .await;

    let department = client(&test.url()).get_department(2).await.unwrap();

    assert_eq!(department.employees.len(), 4);
    assert_eq!(department.preview(3).1, 1);
    test.assert_mocks().await;
}
