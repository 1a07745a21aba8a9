//! Form state for entity CRUD dialogs.
//!
//! Forms hold raw text as typed by the user. `submission()` validates the
//! input and produces the create or update DTO; the error string is shown
//! to the user as-is.

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::models::{
    Building, Classroom, College, CreateBuilding, CreateClassroom, CreateCollege, CreateDepartment, CreateProgram,
    CreateProgramCourse, CreateProgramLevel, CreateProgramTerm, CreateStaff, DegreeType, Department, Program,
    ProgramCourse, ProgramLevel, ProgramTerm, RoomType, Staff, StaffPosition, UpdateBuilding, UpdateClassroom,
    UpdateCollege, UpdateDepartment, UpdateProgram, UpdateProgramCourse, UpdateProgramLevel, UpdateProgramTerm,
    UpdateStaff,
};
use crate::services::Resource;

/// Validated outcome of a form.
pub enum Submission<R: Resource> {
    Create(R::Create),
    Update(i32, R::Update),
}

/// A dialog form bound to one resource.
pub trait EntityForm {
    type Target: Resource;

    fn submission(&self) -> Result<Submission<Self::Target>, String>;
}

fn required(value: &str, field: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn number<T>(value: &str, field: &str, range: RangeInclusive<T>) -> Result<T, String>
where
    T: FromStr + PartialOrd + Display,
{
    let parsed: T = value
        .trim()
        .parse()
        .map_err(|_| format!("{field} must be a whole number"))?;
    if !range.contains(&parsed) {
        return Err(format!(
            "{field} must be between {} and {}",
            range.start(),
            range.end()
        ));
    }
    Ok(parsed)
}

fn selected(value: Option<i32>, field: &str) -> Result<i32, String> {
    value.ok_or_else(|| format!("{field} must be selected"))
}

fn email(value: &str) -> Result<String, String> {
    let value = required(value, "Email")?;
    match value.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') && !domain.starts_with('.') => Ok(value),
        _ => Err("Email address is not valid".to_string()),
    }
}

/// Form state for college CRUD.
#[derive(Debug, Default, Clone)]
pub struct CollegeForm {
    pub id: Option<i32>,
    pub name: String,
    pub code: String,
    pub dean_name: String,
    pub description: String,
    pub is_active: bool,
    pub is_open: bool,
}

impl CollegeForm {
    /// Open an empty form.
    pub fn open_new() -> Self {
        Self {
            is_active: true,
            is_open: true,
            ..Default::default()
        }
    }

    /// Create a form pre-filled for editing an existing college.
    pub fn edit(college: &College) -> Self {
        Self {
            id: Some(college.id),
            name: college.name.clone(),
            code: college.code.clone(),
            dean_name: college.dean_name.clone().unwrap_or_default(),
            description: college.description.clone().unwrap_or_default(),
            is_active: college.is_active,
            is_open: true,
        }
    }
}

impl EntityForm for CollegeForm {
    type Target = College;

    fn submission(&self) -> Result<Submission<College>, String> {
        let name = required(&self.name, "Name")?;
        let code = required(&self.code, "Code")?.to_uppercase();
        let dean_name = optional(&self.dean_name);
        let description = optional(&self.description);

        Ok(match self.id {
            Some(id) => Submission::Update(
                id,
                UpdateCollege {
                    name: Some(name),
                    code: Some(code),
                    dean_name: Some(dean_name),
                    description: Some(description),
                    is_active: Some(self.is_active),
                },
            ),
            None => Submission::Create(CreateCollege {
                name,
                code,
                dean_name,
                description,
                is_active: self.is_active,
            }),
        })
    }
}

/// Form state for department CRUD.
#[derive(Debug, Default, Clone)]
pub struct DepartmentForm {
    pub id: Option<i32>,
    pub college_id: Option<i32>,
    pub name: String,
    pub code: String,
    pub head_name: String,
    pub is_active: bool,
    pub is_open: bool,
}

impl DepartmentForm {
    pub fn open_new(college_id: Option<i32>) -> Self {
        Self {
            college_id,
            is_active: true,
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(dept: &Department) -> Self {
        Self {
            id: Some(dept.id),
            college_id: Some(dept.college_id),
            name: dept.name.clone(),
            code: dept.code.clone(),
            head_name: dept.head_name.clone().unwrap_or_default(),
            is_active: dept.is_active,
            is_open: true,
        }
    }
}

impl EntityForm for DepartmentForm {
    type Target = Department;

    fn submission(&self) -> Result<Submission<Department>, String> {
        let college_id = selected(self.college_id, "College")?;
        let name = required(&self.name, "Name")?;
        let code = required(&self.code, "Code")?.to_uppercase();
        let head_name = optional(&self.head_name);

        Ok(match self.id {
            Some(id) => Submission::Update(
                id,
                UpdateDepartment {
                    college_id: Some(college_id),
                    name: Some(name),
                    code: Some(code),
                    head_name: Some(head_name),
                    is_active: Some(self.is_active),
                },
            ),
            None => Submission::Create(CreateDepartment {
                college_id,
                name,
                code,
                head_name,
                is_active: self.is_active,
            }),
        })
    }
}

/// Form state for program CRUD.
#[derive(Debug, Default, Clone)]
pub struct ProgramForm {
    pub id: Option<i32>,
    pub department_id: Option<i32>,
    pub name: String,
    pub code: String,
    pub degree_type: DegreeType,
    pub duration_years: String,
    pub is_active: bool,
    pub is_open: bool,
}

impl ProgramForm {
    pub fn open_new(department_id: Option<i32>) -> Self {
        Self {
            department_id,
            duration_years: "4".to_string(),
            is_active: true,
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(program: &Program) -> Self {
        Self {
            id: Some(program.id),
            department_id: Some(program.department_id),
            name: program.name.clone(),
            code: program.code.clone(),
            degree_type: program.degree_type,
            duration_years: program.duration_years.to_string(),
            is_active: program.is_active,
            is_open: true,
        }
    }
}

impl EntityForm for ProgramForm {
    type Target = Program;

    fn submission(&self) -> Result<Submission<Program>, String> {
        let department_id = selected(self.department_id, "Department")?;
        let name = required(&self.name, "Name")?;
        let code = required(&self.code, "Code")?.to_uppercase();
        let duration_years = number(&self.duration_years, "Duration (years)", 1..=8)?;

        Ok(match self.id {
            Some(id) => Submission::Update(
                id,
                UpdateProgram {
                    department_id: Some(department_id),
                    name: Some(name),
                    code: Some(code),
                    degree_type: Some(self.degree_type),
                    duration_years: Some(duration_years),
                    is_active: Some(self.is_active),
                },
            ),
            None => Submission::Create(CreateProgram {
                department_id,
                name,
                code,
                degree_type: self.degree_type,
                duration_years,
                is_active: self.is_active,
            }),
        })
    }
}

/// Form state for level CRUD.
#[derive(Debug, Default, Clone)]
pub struct LevelForm {
    pub id: Option<i32>,
    pub program_id: i32,
    pub name: String,
    pub level_number: String,
    pub is_open: bool,
}

impl LevelForm {
    /// Open an empty form, suggesting the next level number.
    pub fn open_new(program_id: i32, existing: &[ProgramLevel]) -> Self {
        let next = existing.iter().map(|l| l.level_number).max().unwrap_or(0).saturating_add(1);
        Self {
            program_id,
            name: format!("{next}00 Level"),
            level_number: next.to_string(),
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(level: &ProgramLevel) -> Self {
        Self {
            id: Some(level.id),
            program_id: level.program_id,
            name: level.name.clone(),
            level_number: level.level_number.to_string(),
            is_open: true,
        }
    }
}

impl EntityForm for LevelForm {
    type Target = ProgramLevel;

    fn submission(&self) -> Result<Submission<ProgramLevel>, String> {
        let name = required(&self.name, "Name")?;
        let level_number = number(&self.level_number, "Level number", 1..=10)?;

        Ok(match self.id {
            Some(id) => Submission::Update(
                id,
                UpdateProgramLevel {
                    name: Some(name),
                    level_number: Some(level_number),
                },
            ),
            None => Submission::Create(CreateProgramLevel {
                program_id: self.program_id,
                name,
                level_number,
            }),
        })
    }
}

/// Form state for term CRUD. Level assignment happens outside the form.
#[derive(Debug, Default, Clone)]
pub struct TermForm {
    pub id: Option<i32>,
    pub program_id: i32,
    pub name: String,
    pub term_number: String,
    pub is_open: bool,
}

impl TermForm {
    pub fn open_new(program_id: i32, existing: &[ProgramTerm]) -> Self {
        let next = existing.iter().map(|t| t.term_number).max().unwrap_or(0).saturating_add(1);
        Self {
            program_id,
            name: format!("Term {next}"),
            term_number: next.to_string(),
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(term: &ProgramTerm) -> Self {
        Self {
            id: Some(term.id),
            program_id: term.program_id,
            name: term.name.clone(),
            term_number: term.term_number.to_string(),
            is_open: true,
        }
    }
}

impl EntityForm for TermForm {
    type Target = ProgramTerm;

    fn submission(&self) -> Result<Submission<ProgramTerm>, String> {
        let name = required(&self.name, "Name")?;
        let term_number = number(&self.term_number, "Term number", 1..=20)?;

        Ok(match self.id {
            Some(id) => Submission::Update(
                id,
                UpdateProgramTerm {
                    level_id: None,
                    name: Some(name),
                    term_number: Some(term_number),
                },
            ),
            None => Submission::Create(CreateProgramTerm {
                program_id: self.program_id,
                level_id: None,
                name,
                term_number,
            }),
        })
    }
}

/// Form state for course CRUD.
#[derive(Debug, Default, Clone)]
pub struct CourseForm {
    pub id: Option<i32>,
    pub program_id: i32,
    pub term_id: Option<i32>,
    pub course_code: String,
    pub course_title: String,
    pub credit_units: String,
    pub is_elective: bool,
    pub is_open: bool,
}

impl CourseForm {
    pub fn open_new(program_id: i32, term_id: Option<i32>) -> Self {
        Self {
            program_id,
            term_id,
            credit_units: "3".to_string(),
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(course: &ProgramCourse) -> Self {
        Self {
            id: Some(course.id),
            program_id: course.program_id,
            term_id: Some(course.term_id),
            course_code: course.course_code.clone(),
            course_title: course.course_title.clone(),
            credit_units: course.credit_units.to_string(),
            is_elective: course.is_elective,
            is_open: true,
        }
    }
}

impl EntityForm for CourseForm {
    type Target = ProgramCourse;

    fn submission(&self) -> Result<Submission<ProgramCourse>, String> {
        let term_id = selected(self.term_id, "Term")?;
        let course_code = required(&self.course_code, "Course code")?.to_uppercase();
        let course_title = required(&self.course_title, "Course title")?;
        let credit_units = number(&self.credit_units, "Credit units", 1..=12)?;

        Ok(match self.id {
            Some(id) => Submission::Update(
                id,
                UpdateProgramCourse {
                    term_id: Some(term_id),
                    course_code: Some(course_code),
                    course_title: Some(course_title),
                    credit_units: Some(credit_units),
                    is_elective: Some(self.is_elective),
                },
            ),
            None => Submission::Create(CreateProgramCourse {
                program_id: self.program_id,
                term_id,
                course_code,
                course_title,
                credit_units,
                is_elective: self.is_elective,
            }),
        })
    }
}

/// Form state for staff CRUD.
#[derive(Debug, Default, Clone)]
pub struct StaffForm {
    pub id: Option<i32>,
    pub staff_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department_id: Option<i32>,
    pub position: StaffPosition,
    pub is_active: bool,
    pub is_open: bool,
}

impl StaffForm {
    pub fn open_new() -> Self {
        Self {
            is_active: true,
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(staff: &Staff) -> Self {
        Self {
            id: Some(staff.id),
            staff_number: staff.staff_number.clone(),
            first_name: staff.first_name.clone(),
            last_name: staff.last_name.clone(),
            email: staff.email.clone(),
            phone: staff.phone.clone().unwrap_or_default(),
            department_id: staff.department_id,
            position: staff.position,
            is_active: staff.is_active,
            is_open: true,
        }
    }
}

impl EntityForm for StaffForm {
    type Target = Staff;

    fn submission(&self) -> Result<Submission<Staff>, String> {
        let staff_number = required(&self.staff_number, "Staff number")?;
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let email = email(&self.email)?;
        let phone = optional(&self.phone);

        Ok(match self.id {
            Some(id) => Submission::Update(
                id,
                UpdateStaff {
                    staff_number: Some(staff_number),
                    first_name: Some(first_name),
                    last_name: Some(last_name),
                    email: Some(email),
                    phone: Some(phone),
                    department_id: Some(self.department_id),
                    position: Some(self.position),
                    is_active: Some(self.is_active),
                },
            ),
            None => Submission::Create(CreateStaff {
                staff_number,
                first_name,
                last_name,
                email,
                phone,
                department_id: self.department_id,
                position: self.position,
                is_active: self.is_active,
            }),
        })
    }
}

/// Form state for building CRUD.
#[derive(Debug, Default, Clone)]
pub struct BuildingForm {
    pub id: Option<i32>,
    pub name: String,
    pub code: String,
    pub location: String,
    pub floors: String,
    pub is_open: bool,
}

impl BuildingForm {
    pub fn open_new() -> Self {
        Self {
            floors: "1".to_string(),
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(building: &Building) -> Self {
        Self {
            id: Some(building.id),
            name: building.name.clone(),
            code: building.code.clone(),
            location: building.location.clone().unwrap_or_default(),
            floors: building.floors.to_string(),
            is_open: true,
        }
    }
}

impl EntityForm for BuildingForm {
    type Target = Building;

    fn submission(&self) -> Result<Submission<Building>, String> {
        let name = required(&self.name, "Name")?;
        let code = required(&self.code, "Code")?.to_uppercase();
        let location = optional(&self.location);
        let floors = number(&self.floors, "Floors", 1..=100)?;

        Ok(match self.id {
            Some(id) => Submission::Update(
                id,
                UpdateBuilding {
                    name: Some(name),
                    code: Some(code),
                    location: Some(location),
                    floors: Some(floors),
                },
            ),
            None => Submission::Create(CreateBuilding {
                name,
                code,
                location,
                floors,
            }),
        })
    }
}

/// Form state for classroom CRUD.
#[derive(Debug, Default, Clone)]
pub struct ClassroomForm {
    pub id: Option<i32>,
    pub building_id: Option<i32>,
    pub room_number: String,
    pub capacity: String,
    pub room_type: RoomType,
    pub has_projector: bool,
    pub is_available: bool,
    pub is_open: bool,
}

impl ClassroomForm {
    pub fn open_new(building_id: Option<i32>) -> Self {
        Self {
            building_id,
            is_available: true,
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(room: &Classroom) -> Self {
        Self {
            id: Some(room.id),
            building_id: Some(room.building_id),
            room_number: room.room_number.clone(),
            capacity: room.capacity.to_string(),
            room_type: room.room_type,
            has_projector: room.has_projector,
            is_available: room.is_available,
            is_open: true,
        }
    }
}

impl EntityForm for ClassroomForm {
    type Target = Classroom;

    fn submission(&self) -> Result<Submission<Classroom>, String> {
        let building_id = selected(self.building_id, "Building")?;
        let room_number = required(&self.room_number, "Room number")?;
        let capacity = number(&self.capacity, "Capacity", 1..=2000)?;

        Ok(match self.id {
            Some(id) => Submission::Update(
                id,
                UpdateClassroom {
                    building_id: Some(building_id),
                    room_number: Some(room_number),
                    capacity: Some(capacity),
                    room_type: Some(self.room_type),
                    has_projector: Some(self.has_projector),
                    is_available: Some(self.is_available),
                },
            ),
            None => Submission::Create(CreateClassroom {
                building_id,
                room_number,
                capacity,
                room_type: self.room_type,
                has_projector: self.has_projector,
                is_available: self.is_available,
            }),
        })
    }
}

/// All dialog forms of the app. A closed form is `Default`.
#[derive(Debug, Default)]
pub struct Forms {
    pub college: CollegeForm,
    pub department: DepartmentForm,
    pub program: ProgramForm,
    pub level: LevelForm,
    pub term: TermForm,
    pub course: CourseForm,
    pub staff: StaffForm,
    pub building: BuildingForm,
    pub classroom: ClassroomForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection<F: EntityForm>(form: &F) -> String {
        match form.submission() {
            Err(msg) => msg,
            Ok(_) => panic!("form was accepted"),
        }
    }

    #[test]
    fn test_new_classroom_requires_building() {
        let form = ClassroomForm {
            room_number: "LT-1".to_string(),
            capacity: "100".to_string(),
            ..ClassroomForm::open_new(None)
        };
        assert_eq!(rejection(&form), "Building must be selected");
    }

    #[test]
    fn test_classroom_capacity_must_be_positive() {
        let form = ClassroomForm {
            room_number: "LT-1".to_string(),
            capacity: "0".to_string(),
            ..ClassroomForm::open_new(Some(1))
        };
        assert!(rejection(&form).contains("between 1 and 2000"));

        let form = ClassroomForm {
            capacity: "lots".to_string(),
            ..form
        };
        assert_eq!(rejection(&form), "Capacity must be a whole number");
    }

    #[test]
    fn test_classroom_create_trims_input() {
        let form = ClassroomForm {
            room_number: "  B-204 ".to_string(),
            capacity: " 45 ".to_string(),
            room_type: RoomType::SeminarRoom,
            ..ClassroomForm::open_new(Some(2))
        };
        match form.submission().unwrap() {
            Submission::Create(data) => {
                assert_eq!(data.building_id, 2);
                assert_eq!(data.room_number, "B-204");
                assert_eq!(data.capacity, 45);
                assert_eq!(data.room_type, RoomType::SeminarRoom);
                assert!(data.is_available);
            }
            Submission::Update(..) => panic!("expected create"),
        }
    }

    #[test]
    fn test_edit_college_produces_update() {
        let college = College {
            id: 9,
            name: "Arts".to_string(),
            code: "art".to_string(),
            dean_name: Some("Prof. Bello".to_string()),
            description: None,
            is_active: true,
        };
        let mut form = CollegeForm::edit(&college);
        form.dean_name.clear();

        match form.submission().unwrap() {
            Submission::Update(id, data) => {
                assert_eq!(id, 9);
                assert_eq!(data.code.as_deref(), Some("ART"));
                assert_eq!(data.dean_name, Some(None));
            }
            Submission::Create(_) => panic!("expected update"),
        }
    }

    #[test]
    fn test_blank_name_rejected() {
        let form = BuildingForm {
            name: "   ".to_string(),
            code: "SCI".to_string(),
            ..BuildingForm::open_new()
        };
        assert_eq!(rejection(&form), "Name is required");
    }

    #[test]
    fn test_staff_email_validation() {
        let base = StaffForm {
            staff_number: "STF-1".to_string(),
            first_name: "Ngozi".to_string(),
            last_name: "Ade".to_string(),
            ..StaffForm::open_new()
        };

        for bad in ["", "ngozi", "ngozi@", "@uni.edu", "ngozi@localhost"] {
            let form = StaffForm {
                email: bad.to_string(),
                ..base.clone()
            };
            assert!(form.submission().is_err(), "accepted {bad:?}");
        }

        let form = StaffForm {
            email: "ngozi@uni.edu".to_string(),
            ..base
        };
        assert!(form.submission().is_ok());
    }

    #[test]
    fn test_course_credit_bounds() {
        let form = CourseForm {
            course_code: "csc101".to_string(),
            course_title: "Intro to Computing".to_string(),
            credit_units: "13".to_string(),
            ..CourseForm::open_new(1, Some(4))
        };
        assert_eq!(rejection(&form), "Credit units must be between 1 and 12");

        let form = CourseForm {
            credit_units: "3".to_string(),
            ..form
        };
        match form.submission().unwrap() {
            Submission::Create(data) => {
                assert_eq!(data.course_code, "CSC101");
                assert_eq!(data.term_id, 4);
            }
            Submission::Update(..) => panic!("expected create"),
        }
    }

    #[test]
    fn test_level_form_suggests_next_number() {
        let levels = vec![
            ProgramLevel {
                id: 1,
                program_id: 3,
                name: "100 Level".to_string(),
                level_number: 1,
            },
            ProgramLevel {
                id: 2,
                program_id: 3,
                name: "200 Level".to_string(),
                level_number: 2,
            },
        ];
        let form = LevelForm::open_new(3, &levels);
        assert_eq!(form.level_number, "3");
        assert_eq!(form.name, "300 Level");
    }

    #[test]
    fn test_next_number_saturates_at_max() {
        let levels = vec![ProgramLevel {
            id: 1,
            program_id: 3,
            name: "Top".to_string(),
            level_number: u8::MAX,
        }];
        let form = LevelForm::open_new(3, &levels);
        assert_eq!(form.level_number, "255");
        assert!(rejection(&form).contains("between 1 and 10"));

        let terms = vec![ProgramTerm {
            id: 1,
            program_id: 3,
            level_id: None,
            name: "Last".to_string(),
            term_number: u8::MAX,
        }];
        let form = TermForm::open_new(3, &terms);
        assert_eq!(form.term_number, "255");
    }

    #[test]
    fn test_term_update_leaves_level_untouched() {
        let term = ProgramTerm {
            id: 5,
            program_id: 1,
            level_id: Some(2),
            name: "First Semester".to_string(),
            term_number: 1,
        };
        match TermForm::edit(&term).submission().unwrap() {
            Submission::Update(_, data) => {
                assert!(data.level_id.is_none());
                let json = serde_json::to_value(&data).unwrap();
                assert!(json.get("level_id").is_none());
            }
            Submission::Create(_) => panic!("expected update"),
        }
    }
}
