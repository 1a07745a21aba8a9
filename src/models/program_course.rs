//! Program course record and DTOs.

use serde::{Deserialize, Serialize};

/// A course taught in a given term of a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramCourse {
    pub id: i32,
    #[serde(alias = "programId")]
    pub program_id: i32,
    #[serde(alias = "termId")]
    pub term_id: i32,
    #[serde(alias = "courseCode")]
    pub course_code: String,
    #[serde(alias = "courseTitle")]
    pub course_title: String,
    #[serde(alias = "creditUnits")]
    pub credit_units: u8,
    #[serde(default, alias = "isElective")]
    pub is_elective: bool,
}

/// DTO for creating a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProgramCourse {
    pub program_id: i32,
    pub term_id: i32,
    pub course_code: String,
    pub course_title: String,
    pub credit_units: u8,
    pub is_elective: bool,
}

/// DTO for updating a course.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProgramCourse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_units: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_elective: Option<bool>,
}

/// Total credit units of the given courses.
pub fn total_credits<'a>(courses: impl IntoIterator<Item = &'a ProgramCourse>) -> u32 {
    courses.into_iter().map(|c| u32::from(c.credit_units)).sum()
}
