//! Classroom record, room types, and DTOs.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Kind of teaching room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    #[default]
    LectureHall,
    Laboratory,
    SeminarRoom,
    ComputerLab,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::LectureHall,
        RoomType::Laboratory,
        RoomType::SeminarRoom,
        RoomType::ComputerLab,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::LectureHall => "Lecture Hall",
            RoomType::Laboratory => "Laboratory",
            RoomType::SeminarRoom => "Seminar Room",
            RoomType::ComputerLab => "Computer Lab",
        }
    }
}

/// A classroom inside a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: i32,
    #[serde(alias = "buildingId")]
    pub building_id: i32,
    #[serde(alias = "roomNumber")]
    pub room_number: String,
    pub capacity: u32,
    #[serde(default, alias = "roomType")]
    pub room_type: RoomType,
    #[serde(default, alias = "hasProjector")]
    pub has_projector: bool,
    #[serde(default = "default_true", alias = "isAvailable")]
    pub is_available: bool,
}

/// DTO for creating a classroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassroom {
    pub building_id: i32,
    pub room_number: String,
    pub capacity: u32,
    pub room_type: RoomType,
    pub has_projector: bool,
    pub is_available: bool,
}

/// DTO for updating a classroom.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClassroom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projector: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}
