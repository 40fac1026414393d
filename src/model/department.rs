use serde::{Deserialize, Serialize};

use crate::model::employee::EmployeeSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub manager_id: Option<i32>,
    #[serde(default)]
    pub employees: Vec<EmployeeSummary>,
}

impl Department {
    /// Splits the employee list into the first `limit` entries and the number left over.
    pub fn preview(&self, limit: usize) -> (&[EmployeeSummary], usize) {
        let shown = self.employees.len().min(limit);
        (&self.employees[..shown], self.employees.len() - shown)
    }
}

/// Body of both the create and the update department requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPayload {
    pub name: String,
    pub manager_id: Option<i32>,
}
