use serde::{Deserialize, Serialize};

/// Short employee representation nested in departments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: i32,
    /// Full name, "last first middle".
    pub fio: String,
}

/// Payload for `POST /employees/with-details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub department_ids: Vec<i32>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
