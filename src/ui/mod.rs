//! GUI pages, shared widgets, and application state.

pub mod app;
pub mod buildings_page;
pub mod classrooms_page;
pub mod colleges_page;
pub mod components;
pub mod dashboard;
pub mod departments_page;
pub mod forms;
pub mod integration_hub;
pub mod layout;
pub mod programs_page;
pub mod setup_wizard;
pub mod sidebar;
pub mod staff_page;
pub mod store;
pub mod system_settings;
pub mod top_bar;

pub use app::App;
pub use setup_wizard::{SetupApp, SetupWizard};
