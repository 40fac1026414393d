use crate::{
    client::{
        api::{ApiClient, Transport},
        error::ApiError,
    },
    model::department::{Department, DepartmentPayload},
};

impl<T: Transport> ApiClient<T> {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get("/departments/", &[]).await
    }

    pub async fn get_department(&self, id: i32) -> Result<Department, ApiError> {
        self.get(&format!("/departments/{id}"), &[]).await
    }

    pub async fn create_department(
        &self,
        department: &DepartmentPayload,
    ) -> Result<Department, ApiError> {
        self.post_json("/departments/", department).await
    }

    pub async fn update_department(
        &self,
        id: i32,
        department: &DepartmentPayload,
    ) -> Result<Department, ApiError> {
        self.put_json(&format!("/departments/{id}"), department).await
    }

    pub async fn delete_department(&self, id: i32) -> Result<(), ApiError> {
        self.delete(&format!("/departments/{id}")).await
    }
}
