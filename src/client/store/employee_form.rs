use std::collections::BTreeSet;

use crate::{client::error::ValidationError, model::employee::NewEmployee};

pub static CREATE_FAILED: &str = "Failed to add the employee. Please check the data and try again.";
pub static DEPARTMENTS_FAILED: &str = "Failed to load departments";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub department_ids: BTreeSet<i32>,
}

impl EmployeeForm {
    pub fn toggle_department(&mut self, id: i32, selected: bool) {
        if selected {
            self.department_ids.insert(id);
        } else {
            self.department_ids.remove(&id);
        }
    }

    pub fn is_selected(&self, id: i32) -> bool {
        self.department_ids.contains(&id)
    }

    /// Requires a last name, a first name and at least one department.
    pub fn validate(&self) -> Result<NewEmployee, ValidationError> {
        if self.last_name.trim().is_empty()
            || self.first_name.trim().is_empty()
            || self.department_ids.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        Ok(NewEmployee {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            middle_name: optional(&self.middle_name),
            department_ids: self.department_ids.iter().copied().collect(),
            position: optional(&self.position),
            email: optional(&self.email),
            phone: optional(&self.phone),
        })
    }
}

/// Blank inputs are sent as absent.
pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
