//! Department management: the create/edit modal and the delete confirmation.

use crate::{
    client::{
        api::{ApiClient, Transport},
        error::{Error, ValidationError},
        store::FormStatus,
    },
    model::department::{Department, DepartmentPayload},
};

pub static LOAD_FAILED: &str = "Failed to load departments. Please try again later.";
pub static SAVE_FAILED: &str = "Failed to save the department";
pub static DELETE_FAILED: &str = "Failed to delete the department";

/// Number of employees listed on a department card.
pub const EMPLOYEE_PREVIEW: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Closed,
    Creating,
    Editing(i32),
}

/// A validated save of the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum DepartmentSubmission {
    Create(DepartmentPayload),
    Update(i32, DepartmentPayload),
}

/// Create/edit modal and delete confirmation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentEditor {
    pub mode: EditorMode,
    pub name: String,
    /// Selected manager, `None` for no manager.
    pub manager_id: Option<i32>,
    pub pending_delete: Option<i32>,
    /// Save state of the modal.
    pub status: FormStatus,
}

impl DepartmentEditor {
    pub fn open_create(&mut self) {
        self.mode = EditorMode::Creating;
        self.name.clear();
        self.manager_id = None;
        self.status = FormStatus::default();
    }

    pub fn open_edit(&mut self, department: &Department) {
        self.mode = EditorMode::Editing(department.id);
        self.name = department.name.clone();
        self.manager_id = department.manager_id;
        self.status = FormStatus::default();
    }

    pub fn close(&mut self) {
        self.mode = EditorMode::Closed;
        self.name.clear();
        self.manager_id = None;
        self.status = FormStatus::default();
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Editing(_) => "Edit department",
            _ => "Create department",
        }
    }

    /// Sets the manager from a select value, where an empty value means no manager.
    pub fn set_manager(&mut self, value: &str) {
        self.manager_id = value.trim().parse().ok();
    }

    pub fn submission(&self) -> Result<DepartmentSubmission, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let payload = DepartmentPayload {
            name: name.to_string(),
            manager_id: self.manager_id,
        };

        match self.mode {
            EditorMode::Editing(id) => Ok(DepartmentSubmission::Update(id, payload)),
            _ => Ok(DepartmentSubmission::Create(payload)),
        }
    }

    /// Validates the modal and marks it as saving.
    ///
    /// Returns `Ok(None)` while an earlier save is still outstanding.
    pub fn begin_save(&mut self) -> Result<Option<DepartmentSubmission>, ValidationError> {
        if self.status.submitting {
            return Ok(None);
        }

        match self.submission() {
            Ok(submission) => {
                self.status.begin();
                Ok(Some(submission))
            }
            Err(err) => {
                self.status.fail(err.to_string());
                Err(err)
            }
        }
    }

    pub fn request_delete(&mut self, id: i32) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Closes the confirmation and returns the department to delete.
    pub fn confirm_delete(&mut self) -> Option<i32> {
        self.pending_delete.take()
    }
}

pub async fn save_department<T: Transport>(
    api: &ApiClient<T>,
    submission: &DepartmentSubmission,
) -> Result<Department, Error> {
    let department = match submission {
        DepartmentSubmission::Create(payload) => api.create_department(payload).await?,
        DepartmentSubmission::Update(id, payload) => api.update_department(*id, payload).await?,
    };

    Ok(department)
}
