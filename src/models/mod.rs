//! Data models for academic structure, staff, and facilities.
//!
//! Records decode from the API's snake_case JSON and also accept the
//! camelCase spelling of multi-word fields. They always encode as snake_case.

pub mod building;
pub mod classroom;
pub mod college;
pub mod department;
pub mod program;
pub mod program_course;
pub mod program_level;
pub mod program_term;
pub mod staff;

pub use building::{Building, CreateBuilding, UpdateBuilding};
pub use classroom::{Classroom, CreateClassroom, RoomType, UpdateClassroom};
pub use college::{College, CreateCollege, UpdateCollege};
pub use department::{CreateDepartment, Department, UpdateDepartment};
pub use program::{CreateProgram, DegreeType, Program, UpdateProgram};
pub use program_course::{CreateProgramCourse, ProgramCourse, UpdateProgramCourse};
pub use program_level::{CreateProgramLevel, ProgramLevel, UpdateProgramLevel};
pub use program_term::{CreateProgramTerm, MAX_TERMS_PER_LEVEL, ProgramTerm, UpdateProgramTerm};
pub use staff::{CreateStaff, Staff, StaffPosition, UpdateStaff};

/// Kind of record managed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    College,
    Department,
    Program,
    ProgramLevel,
    ProgramTerm,
    ProgramCourse,
    Staff,
    Building,
    Classroom,
}

impl EntityKind {
    /// Singular display name.
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::College => "College",
            EntityKind::Department => "Department",
            EntityKind::Program => "Program",
            EntityKind::ProgramLevel => "Level",
            EntityKind::ProgramTerm => "Term",
            EntityKind::ProgramCourse => "Course",
            EntityKind::Staff => "Staff member",
            EntityKind::Building => "Building",
            EntityKind::Classroom => "Classroom",
        }
    }
}

pub(crate) fn default_true() -> bool {
    true
}
