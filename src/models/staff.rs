//! Staff record, positions, and DTOs.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Staff position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffPosition {
    #[default]
    Lecturer,
    SeniorLecturer,
    Professor,
    Administrator,
    Technician,
}

impl StaffPosition {
    pub const ALL: [StaffPosition; 5] = [
        StaffPosition::Lecturer,
        StaffPosition::SeniorLecturer,
        StaffPosition::Professor,
        StaffPosition::Administrator,
        StaffPosition::Technician,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StaffPosition::Lecturer => "Lecturer",
            StaffPosition::SeniorLecturer => "Senior Lecturer",
            StaffPosition::Professor => "Professor",
            StaffPosition::Administrator => "Administrator",
            StaffPosition::Technician => "Technician",
        }
    }
}

/// A member of staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: i32,
    #[serde(alias = "staffNumber")]
    pub staff_number: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "departmentId")]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub position: StaffPosition,
    #[serde(default = "default_true", alias = "isActive")]
    pub is_active: bool,
}

impl Staff {
    /// First and last name joined.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// DTO for creating a staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStaff {
    pub staff_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
    pub position: StaffPosition,
    pub is_active: bool,
}

/// DTO for updating a staff member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStaff {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Option<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<StaffPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
