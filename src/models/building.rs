//! Building record and DTOs.

use serde::{Deserialize, Serialize};

/// A campus building housing classrooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub location: Option<String>,
    pub floors: u8,
}

/// DTO for creating a building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBuilding {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub floors: u8,
}

/// DTO for updating a building.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBuilding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floors: Option<u8>,
}
