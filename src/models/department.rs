//! Department record and DTOs.

use serde::{Deserialize, Serialize};

use super::default_true;

/// An academic department within a college.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i32,
    #[serde(alias = "collegeId")]
    pub college_id: i32,
    pub name: String,
    pub code: String,
    #[serde(default, alias = "headName")]
    pub head_name: Option<String>,
    #[serde(default = "default_true", alias = "isActive")]
    pub is_active: bool,
}

/// DTO for creating a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartment {
    pub college_id: i32,
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_name: Option<String>,
    pub is_active: bool,
}

/// DTO for updating a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDepartment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
