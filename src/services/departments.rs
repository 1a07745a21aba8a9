//! Department service.

use super::Resource;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{CreateDepartment, Department, EntityKind, UpdateDepartment};

impl Resource for Department {
    const PATH: &'static str = "departments";
    const KIND: EntityKind = EntityKind::Department;

    type Create = CreateDepartment;
    type Update = UpdateDepartment;

    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// List departments of a college.
pub async fn list_by_college(client: &ApiClient, college_id: i32) -> Result<Vec<Department>> {
    super::list_where(client, "college_id", college_id).await
}
