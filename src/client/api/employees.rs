use crate::{
    client::{
        api::{ApiClient, Transport},
        error::ApiError,
    },
    model::employee::{EmployeeSummary, NewEmployee},
};

impl<T: Transport> ApiClient<T> {
    /// Creates an employee and links it to the selected departments.
    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<EmployeeSummary, ApiError> {
        self.post_json("/employees/with-details", employee).await
    }
}
