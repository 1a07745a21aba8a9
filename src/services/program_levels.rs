//! Program level service.

use super::Resource;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{CreateProgramLevel, EntityKind, ProgramLevel, UpdateProgramLevel};

impl Resource for ProgramLevel {
    const PATH: &'static str = "program-levels";
    const KIND: EntityKind = EntityKind::ProgramLevel;

    type Create = CreateProgramLevel;
    type Update = UpdateProgramLevel;

    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// List levels of a program, ordered by level number.
pub async fn list_by_program(client: &ApiClient, program_id: i32) -> Result<Vec<ProgramLevel>> {
    let mut levels: Vec<ProgramLevel> = super::list_where(client, "program_id", program_id).await?;
    levels.sort_by_key(|l| l.level_number);
    Ok(levels)
}
