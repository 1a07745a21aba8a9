//! Program term service.

use super::Resource;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::program_term::check_level_assignment;
use crate::models::{CreateProgramTerm, EntityKind, ProgramLevel, ProgramTerm, UpdateProgramTerm};

impl Resource for ProgramTerm {
    const PATH: &'static str = "program-terms";
    const KIND: EntityKind = EntityKind::ProgramTerm;

    type Create = CreateProgramTerm;
    type Update = UpdateProgramTerm;

    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// List terms of a program, ordered by term number.
pub async fn list_by_program(client: &ApiClient, program_id: i32) -> Result<Vec<ProgramTerm>> {
    let mut terms: Vec<ProgramTerm> = super::list_where(client, "program_id", program_id).await?;
    terms.sort_by_key(|t| t.term_number);
    Ok(terms)
}

/// Place a term in a level after checking the level rules against `known_terms`.
pub async fn assign_to_level(
    client: &ApiClient,
    known_terms: &[ProgramTerm],
    term: &ProgramTerm,
    level: &ProgramLevel,
) -> Result<ProgramTerm> {
    check_level_assignment(known_terms, term, level)?;

    let data = UpdateProgramTerm {
        level_id: Some(Some(level.id)),
        ..Default::default()
    };
    super::update(client, term.id, &data).await
}

/// Detach a term from its level.
pub async fn unassign_level(client: &ApiClient, term_id: i32) -> Result<ProgramTerm> {
    let data = UpdateProgramTerm {
        level_id: Some(None),
        ..Default::default()
    };
    super::update(client, term_id, &data).await
}
