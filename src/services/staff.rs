//! Staff service.

use super::Resource;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{CreateStaff, EntityKind, Staff, UpdateStaff};

impl Resource for Staff {
    const PATH: &'static str = "staff";
    const KIND: EntityKind = EntityKind::Staff;

    type Create = CreateStaff;
    type Update = UpdateStaff;

    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.full_name()
    }
}

/// List staff attached to a department.
pub async fn list_by_department(client: &ApiClient, department_id: i32) -> Result<Vec<Staff>> {
    super::list_where(client, "department_id", department_id).await
}
