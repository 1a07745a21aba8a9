//! Program course service.

use super::Resource;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{CreateProgramCourse, EntityKind, ProgramCourse, UpdateProgramCourse};

impl Resource for ProgramCourse {
    const PATH: &'static str = "program-courses";
    const KIND: EntityKind = EntityKind::ProgramCourse;

    type Create = CreateProgramCourse;
    type Update = UpdateProgramCourse;

    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} {}", self.course_code, self.course_title)
    }
}

/// List courses taught in a term.
pub async fn list_by_term(client: &ApiClient, term_id: i32) -> Result<Vec<ProgramCourse>> {
    super::list_where(client, "term_id", term_id).await
}

/// List every course of a program.
pub async fn list_by_program(client: &ApiClient, program_id: i32) -> Result<Vec<ProgramCourse>> {
    super::list_where(client, "program_id", program_id).await
}
