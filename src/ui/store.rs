//! Locally held records for all panels.

use crate::models::{
    Building, Classroom, College, Department, EntityKind, Program, ProgramCourse, ProgramLevel, ProgramTerm, Staff,
};
use crate::services::Resource;

/// Cached records, as last fetched or saved.
#[derive(Debug, Default)]
pub struct Store {
    pub colleges: Vec<College>,
    pub departments: Vec<Department>,
    pub programs: Vec<Program>,
    /// Levels of the program selected on the programs page.
    pub levels: Vec<ProgramLevel>,
    /// Terms of the program selected on the programs page.
    pub terms: Vec<ProgramTerm>,
    /// Courses of the program selected on the programs page.
    pub courses: Vec<ProgramCourse>,
    pub staff: Vec<Staff>,
    pub buildings: Vec<Building>,
    pub classrooms: Vec<Classroom>,
}

/// A fetched list, tagged by entity.
#[derive(Debug)]
pub enum Listing {
    Colleges(Vec<College>),
    Departments(Vec<Department>),
    Programs(Vec<Program>),
    Levels(Vec<ProgramLevel>),
    Terms(Vec<ProgramTerm>),
    Courses(Vec<ProgramCourse>),
    Staff(Vec<Staff>),
    Buildings(Vec<Building>),
    Classrooms(Vec<Classroom>),
}

/// A single saved record, tagged by entity.
#[derive(Debug)]
pub enum Record {
    College(College),
    Department(Department),
    Program(Program),
    Level(ProgramLevel),
    Term(ProgramTerm),
    Course(ProgramCourse),
    Staff(Staff),
    Building(Building),
    Classroom(Classroom),
}

impl Record {
    /// Owning program of a level, term, or course.
    pub fn program_id(&self) -> Option<i32> {
        match self {
            Record::Level(level) => Some(level.program_id),
            Record::Term(term) => Some(term.program_id),
            Record::Course(course) => Some(course.program_id),
            _ => None,
        }
    }

    /// Kind and display label, without touching the cache.
    pub fn summary(&self) -> (EntityKind, String) {
        match self {
            Record::College(item) => (EntityKind::College, item.label()),
            Record::Department(item) => (EntityKind::Department, item.label()),
            Record::Program(item) => (EntityKind::Program, item.label()),
            Record::Level(item) => (EntityKind::ProgramLevel, item.label()),
            Record::Term(item) => (EntityKind::ProgramTerm, item.label()),
            Record::Course(item) => (EntityKind::ProgramCourse, item.label()),
            Record::Staff(item) => (EntityKind::Staff, item.label()),
            Record::Building(item) => (EntityKind::Building, item.label()),
            Record::Classroom(item) => (EntityKind::Classroom, item.label()),
        }
    }
}

/// Binds a resource to its slot in the store and its message wrappers.
pub trait Cached: Resource {
    fn slot(store: &mut Store) -> &mut Vec<Self>;
    fn listing(items: Vec<Self>) -> Listing;
    fn record(self) -> Record;
}

macro_rules! cached {
    ($ty:ty, $field:ident, $listing:ident, $record:ident) => {
        impl Cached for $ty {
            fn slot(store: &mut Store) -> &mut Vec<Self> {
                &mut store.$field
            }

            fn listing(items: Vec<Self>) -> Listing {
                Listing::$listing(items)
            }

            fn record(self) -> Record {
                Record::$record(self)
            }
        }
    };
}

cached!(College, colleges, Colleges, College);
cached!(Department, departments, Departments, Department);
cached!(Program, programs, Programs, Program);
cached!(ProgramLevel, levels, Levels, Level);
cached!(ProgramTerm, terms, Terms, Term);
cached!(ProgramCourse, courses, Courses, Course);
cached!(Staff, staff, Staff, Staff);
cached!(Building, buildings, Buildings, Building);
cached!(Classroom, classrooms, Classrooms, Classroom);

impl Store {
    /// Replace a whole list.
    pub fn replace<R: Cached>(&mut self, items: Vec<R>) {
        *R::slot(self) = items;
    }

    /// Replace the record with the same id, or append it.
    pub fn upsert<R: Cached>(&mut self, item: R) {
        let slot = R::slot(self);
        match slot.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => *existing = item,
            None => slot.push(item),
        }
    }

    /// Drop a record by id.
    pub fn remove<R: Cached>(&mut self, id: i32) {
        R::slot(self).retain(|item| item.id() != id);
    }

    /// Store a fetched list.
    pub fn apply_listing(&mut self, listing: Listing) {
        match listing {
            Listing::Colleges(items) => self.replace(items),
            Listing::Departments(items) => self.replace(items),
            Listing::Programs(items) => self.replace(items),
            Listing::Levels(items) => self.replace(items),
            Listing::Terms(items) => self.replace(items),
            Listing::Courses(items) => self.replace(items),
            Listing::Staff(items) => self.replace(items),
            Listing::Buildings(items) => self.replace(items),
            Listing::Classrooms(items) => self.replace(items),
        }
    }

    /// Store a saved record. Returns its kind and label.
    pub fn apply_record(&mut self, record: Record) -> (EntityKind, String) {
        match record {
            Record::College(item) => self.upsert_labeled(item),
            Record::Department(item) => self.upsert_labeled(item),
            Record::Program(item) => self.upsert_labeled(item),
            Record::Level(item) => self.upsert_labeled(item),
            Record::Term(item) => self.upsert_labeled(item),
            Record::Course(item) => self.upsert_labeled(item),
            Record::Staff(item) => self.upsert_labeled(item),
            Record::Building(item) => self.upsert_labeled(item),
            Record::Classroom(item) => self.upsert_labeled(item),
        }
    }

    fn upsert_labeled<R: Cached>(&mut self, item: R) -> (EntityKind, String) {
        let label = item.label();
        self.upsert(item);
        (R::KIND, label)
    }

    /// Drop a deleted record.
    pub fn apply_delete(&mut self, kind: EntityKind, id: i32) {
        match kind {
            EntityKind::College => self.remove::<College>(id),
            EntityKind::Department => self.remove::<Department>(id),
            EntityKind::Program => self.remove::<Program>(id),
            EntityKind::ProgramLevel => self.remove::<ProgramLevel>(id),
            EntityKind::ProgramTerm => self.remove::<ProgramTerm>(id),
            EntityKind::ProgramCourse => self.remove::<ProgramCourse>(id),
            EntityKind::Staff => self.remove::<Staff>(id),
            EntityKind::Building => self.remove::<Building>(id),
            EntityKind::Classroom => self.remove::<Classroom>(id),
        }
    }

    /// Name lookups used by tables and combo boxes.
    pub fn college_name(&self, id: i32) -> Option<&str> {
        self.colleges.iter().find(|c| c.id == id).map(|c| c.name.as_str())
    }

    pub fn department_name(&self, id: i32) -> Option<&str> {
        self.departments.iter().find(|d| d.id == id).map(|d| d.name.as_str())
    }

    pub fn building_name(&self, id: i32) -> Option<&str> {
        self.buildings.iter().find(|b| b.id == id).map(|b| b.name.as_str())
    }

    pub fn college_options(&self) -> Vec<(i32, String)> {
        self.colleges.iter().map(|c| (c.id, c.name.clone())).collect()
    }

    pub fn department_options(&self) -> Vec<(i32, String)> {
        self.departments.iter().map(|d| (d.id, d.name.clone())).collect()
    }

    pub fn building_options(&self) -> Vec<(i32, String)> {
        self.buildings.iter().map(|b| (b.id, b.name.clone())).collect()
    }
}
