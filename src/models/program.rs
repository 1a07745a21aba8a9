//! Program record, degree types, and DTOs.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Award granted on completing a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeType {
    Certificate,
    Diploma,
    #[default]
    Bachelor,
    Master,
    Doctorate,
}

impl DegreeType {
    pub const ALL: [DegreeType; 5] = [
        DegreeType::Certificate,
        DegreeType::Diploma,
        DegreeType::Bachelor,
        DegreeType::Master,
        DegreeType::Doctorate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DegreeType::Certificate => "Certificate",
            DegreeType::Diploma => "Diploma",
            DegreeType::Bachelor => "Bachelor",
            DegreeType::Master => "Master",
            DegreeType::Doctorate => "Doctorate",
        }
    }
}

/// A degree program offered by a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: i32,
    #[serde(alias = "departmentId")]
    pub department_id: i32,
    pub name: String,
    pub code: String,
    #[serde(default, alias = "degreeType")]
    pub degree_type: DegreeType,
    #[serde(alias = "durationYears")]
    pub duration_years: u8,
    #[serde(default = "default_true", alias = "isActive")]
    pub is_active: bool,
}

/// DTO for creating a program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProgram {
    pub department_id: i32,
    pub name: String,
    pub code: String,
    pub degree_type: DegreeType,
    pub duration_years: u8,
    pub is_active: bool,
}

/// DTO for updating a program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProgram {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_type: Option<DegreeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_years: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_type_wire_names() {
        assert_eq!(serde_json::to_string(&DegreeType::Doctorate).unwrap(), "\"doctorate\"");
        let parsed: DegreeType = serde_json::from_str("\"master\"").unwrap();
        assert_eq!(parsed, DegreeType::Master);
    }

    #[test]
    fn test_decode_program_camel_case() {
        let json = r#"{"id": 4, "departmentId": 2, "name": "Computer Science", "code": "CSC",
                       "degreeType": "bachelor", "durationYears": 4}"#;
        let program: Program = serde_json::from_str(json).unwrap();
        assert_eq!(program.department_id, 2);
        assert_eq!(program.duration_years, 4);
        assert!(program.is_active);
    }
}
