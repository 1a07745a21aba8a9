//! Program service.

use super::Resource;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{CreateProgram, EntityKind, Program, UpdateProgram};

impl Resource for Program {
    const PATH: &'static str = "programs";
    const KIND: EntityKind = EntityKind::Program;

    type Create = CreateProgram;
    type Update = UpdateProgram;

    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// List programs offered by a department.
pub async fn list_by_department(client: &ApiClient, department_id: i32) -> Result<Vec<Program>> {
    super::list_where(client, "department_id", department_id).await
}
