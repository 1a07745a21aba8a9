//! Program term (semester) record, DTOs, and level assignment rules.

use serde::{Deserialize, Serialize};

use super::program_level::ProgramLevel;
use crate::error::{AppError, Result};

/// Maximum number of terms a single level can hold.
pub const MAX_TERMS_PER_LEVEL: usize = 2;

/// A term within a program. Belongs to at most one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramTerm {
    pub id: i32,
    #[serde(alias = "programId")]
    pub program_id: i32,
    #[serde(default, alias = "levelId")]
    pub level_id: Option<i32>,
    pub name: String,
    #[serde(alias = "termNumber")]
    pub term_number: u8,
}

/// DTO for creating a term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProgramTerm {
    pub program_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_id: Option<i32>,
    pub name: String,
    pub term_number: u8,
}

/// DTO for updating a term.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProgramTerm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_id: Option<Option<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_number: Option<u8>,
}

/// Count the terms currently attached to `level_id`.
pub fn terms_in_level(terms: &[ProgramTerm], level_id: i32) -> usize {
    terms.iter().filter(|t| t.level_id == Some(level_id)).count()
}

/// Check that `term` may be placed in `level`.
///
/// `terms` is the locally held term list of the program; the term itself is
/// ignored when counting, so re-assigning to its current level is accepted.
pub fn check_level_assignment(terms: &[ProgramTerm], term: &ProgramTerm, level: &ProgramLevel) -> Result<()> {
    if term.program_id != level.program_id {
        return Err(AppError::validation(format!(
            "Term '{}' and level '{}' belong to different programs",
            term.name, level.name
        )));
    }

    let occupied = terms
        .iter()
        .filter(|t| t.id != term.id && t.level_id == Some(level.id))
        .count();

    if occupied >= MAX_TERMS_PER_LEVEL {
        return Err(AppError::validation(format!(
            "Level '{}' already has {} terms",
            level.name, MAX_TERMS_PER_LEVEL
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(id: i32, program_id: i32) -> ProgramLevel {
        ProgramLevel {
            id,
            program_id,
            name: format!("{id}00 Level"),
            level_number: id as u8,
        }
    }

    fn term(id: i32, level_id: Option<i32>) -> ProgramTerm {
        ProgramTerm {
            id,
            program_id: 1,
            level_id,
            name: format!("Term {id}"),
            term_number: id as u8,
        }
    }

    #[test]
    fn test_assign_to_empty_level() {
        let terms = vec![term(1, None)];
        assert!(check_level_assignment(&terms, &terms[0], &level(1, 1)).is_ok());
    }

    #[test]
    fn test_third_term_rejected() {
        let terms = vec![term(1, Some(1)), term(2, Some(1)), term(3, None)];
        let result = check_level_assignment(&terms, &terms[2], &level(1, 1));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_reassign_to_same_full_level_allowed() {
        let terms = vec![term(1, Some(1)), term(2, Some(1))];
        assert!(check_level_assignment(&terms, &terms[1], &level(1, 1)).is_ok());
    }

    #[test]
    fn test_moving_term_between_levels() {
        let terms = vec![term(1, Some(1)), term(2, Some(1)), term(3, Some(2))];
        assert!(check_level_assignment(&terms, &terms[0], &level(2, 1)).is_ok());
    }

    #[test]
    fn test_level_from_other_program_rejected() {
        let terms = vec![term(1, None)];
        assert!(check_level_assignment(&terms, &terms[0], &level(5, 9)).is_err());
    }

    #[test]
    fn test_terms_in_level() {
        let terms = vec![term(1, Some(1)), term(2, Some(2)), term(3, Some(1)), term(4, None)];
        assert_eq!(terms_in_level(&terms, 1), 2);
        assert_eq!(terms_in_level(&terms, 2), 1);
        assert_eq!(terms_in_level(&terms, 3), 0);
    }
}
