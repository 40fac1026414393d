//! Tests for DepartmentEditor and save_department
//!
//! These tests verify:
//! - The shared modal switches between create and edit
//! - A cancelled delete issues no request
//! - A second save while the first is outstanding sends nothing
//! - Saving the same update twice leaves the list unchanged

use scitrack_test_utils::prelude::*;

use super::client;
use crate::{
    client::{
        error::ValidationError,
        store::departments::{save_department, DepartmentEditor, DepartmentSubmission, EditorMode},
    },
    model::department::{Department, DepartmentPayload},
};

fn department(id: i32, name: &str, manager_id: Option<i32>) -> Department {
    serde_json::from_value(factory::department(id, name, manager_id, &[])).unwrap()
}

/// Tests opening the editor for an existing department.
///
/// Expected: fields prefilled and an update submission
#[test]
fn edit_prefills_and_updates() {
    let mut editor = DepartmentEditor::default();

    editor.open_edit(&department(4, "Physics", Some(2)));
    assert_eq!(editor.mode, EditorMode::Editing(4));
    assert_eq!(editor.name, "Physics");

    editor.set_manager("");
    assert_eq!(
        editor.submission(),
        Ok(DepartmentSubmission::Update(
            4,
            DepartmentPayload {
                name: "Physics".to_string(),
                manager_id: None,
            }
        ))
    );

    editor.close();
    assert!(!editor.is_open());
}

/// Tests creating with a blank name.
///
/// Expected: Err(MissingFields)
#[test]
fn create_requires_name() {
    let mut editor = DepartmentEditor::default();
    editor.open_create();
    editor.name = "   ".to_string();
    editor.set_manager("7");

    assert_eq!(editor.manager_id, Some(7));
    assert_eq!(editor.submission(), Err(ValidationError::MissingFields));
}

/// Tests cancelling the delete confirmation.
///
/// Expected: nothing to delete and zero DELETE requests
#[tokio::test]
async fn cancelled_delete_sends_nothing() {
    let test = TestBuilder::new().with_department_delete(3, 0).build().await;
    let api = client(&test.url());
    let mut editor = DepartmentEditor::default();

    editor.request_delete(3);
    editor.cancel_delete();

    if let Some(id) = editor.confirm_delete() {
        api.delete_department(id).await.unwrap();
    }
    test.assert_mocks().await;
}

/// Tests confirming the delete.
///
/// Expected: exactly one DELETE for the requested department
#[tokio::test]
async fn confirmed_delete_sends_once() {
    let test = TestBuilder::new().with_department_delete(3, 1).build().await;
    let api = client(&test.url());
    let mut editor = DepartmentEditor::default();

    editor.request_delete(3);
    let id = editor.confirm_delete();
    assert_eq!(id, Some(3));
    assert_eq!(editor.confirm_delete(), None);

    api.delete_department(3).await.unwrap();
    test.assert_mocks().await;
}

/// Tests saving the same update twice.
///
/// Expected: the re-fetched list is identical after each save
#[tokio::test]
async fn repeated_update_is_idempotent() {
    let updated = factory::department(4, "Optics", Some(9), &[(1, "Ivanov Ivan")]);
    let test = TestBuilder::new()
        .with_department_update(4, updated.clone(), 2)
        .with_departments(vec![updated], 2)
        .build()
        .await;
    let api = client(&test.url());
    let submission = DepartmentSubmission::Update(
        4,
        DepartmentPayload {
            name: "Optics".to_string(),
            manager_id: Some(9),
        },
    );

    save_department(&api, &submission).await.unwrap();
    let first = api.list_departments().await.unwrap();
    save_department(&api, &submission).await.unwrap();
    let second = api.list_departments().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first[0].name, "Optics");
    test.assert_mocks().await;
}

/// Tests pressing Save again before the first create has answered.
///
/// Expected: one POST, the second attempt yields no submission
#[tokio::test]
async fn second_save_while_saving_sends_nothing() {
    let test = TestBuilder::new()
        .with_endpoint(
            Endpoint::post("/departments/")
                .respond(200, factory::department(5, "Optics", None, &[]))
                .expect(1),
        )
        .build()
        .await;
    let api = client(&test.url());
    let mut editor = DepartmentEditor::default();
    editor.open_create();
    editor.name = "Optics".to_string();

    let first = editor.begin_save().unwrap();
    assert!(editor.status.submitting);
    assert_eq!(editor.begin_save(), Ok(None));

    if let Some(submission) = first {
        save_department(&api, &submission).await.unwrap();
    }
    editor.close();
    assert!(!editor.status.submitting);
    test.assert_mocks().await;
}

/// Tests saving with a blank name.
///
/// Expected: Err(MissingFields), message kept on the modal, not left submitting
#[test]
fn invalid_save_reports_on_modal() {
    let mut editor = DepartmentEditor::default();
    editor.open_create();

    assert_eq!(editor.begin_save(), Err(ValidationError::MissingFields));
    assert!(!editor.status.submitting);
    assert_eq!(
        editor.status.error.as_deref(),
        Some("Please fill in all required fields")
    );
}
