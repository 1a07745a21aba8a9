//! Program level (year of study) record and DTOs.

use serde::{Deserialize, Serialize};

/// A level within a program, e.g. "100 Level".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramLevel {
    pub id: i32,
    #[serde(alias = "programId")]
    pub program_id: i32,
    pub name: String,
    #[serde(alias = "levelNumber")]
    pub level_number: u8,
}

/// DTO for creating a level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProgramLevel {
    pub program_id: i32,
    pub name: String,
    pub level_number: u8,
}

/// DTO for updating a level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProgramLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_number: Option<u8>,
}
