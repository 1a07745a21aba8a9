//! Main application state and async dispatch.

use std::collections::VecDeque;
use std::future::Future;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::error::Result;
use crate::models::{
    Building, Classroom, College, Department, EntityKind, Program, ProgramCourse, ProgramLevel, ProgramTerm, Staff,
};
use crate::services::{self, program_courses, program_levels, program_terms};

use super::forms::{EntityForm, Forms, Submission};
use super::integration_hub::{Integration, default_integrations};
use super::store::{Cached, Listing, Record, Store};

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    Colleges,
    Departments,
    Programs,
    Staff,
    Buildings,
    Classrooms,
    Integrations,
    Settings,
}

impl Panel {
    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Colleges => "Colleges",
            Panel::Departments => "Departments",
            Panel::Programs => "Programs",
            Panel::Staff => "Staff",
            Panel::Buildings => "Buildings",
            Panel::Classrooms => "Classrooms",
            Panel::Integrations => "Integrations",
            Panel::Settings => "Settings",
        }
    }

    /// Whether the top bar search box applies to this panel.
    pub fn is_searchable(&self) -> bool {
        !matches!(self, Panel::Dashboard | Panel::Integrations | Panel::Settings)
    }
}

/// REST API reachability as last observed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiStatus {
    #[default]
    Unknown,
    Checking,
    Online,
    Offline(String),
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    Loaded(Listing),
    /// Levels, terms, or courses fetched for one program.
    StructureLoaded(i32, Listing),
    LoadFailed(EntityKind, String),
    Saved(Record),
    Deleted(EntityKind, i32),
    OperationFailed(String),
    /// A term's level change was refused; restore `previous` locally.
    LevelChangeFailed {
        term_id: i32,
        attempted: Option<i32>,
        previous: Option<i32>,
        error: String,
    },
    HealthChecked(std::result::Result<bool, String>),
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Target for delete confirmation dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteTarget {
    pub kind: EntityKind,
    pub id: i32,
    pub label: String,
}

impl DeleteTarget {
    pub fn of<R: Cached>(item: &R) -> Self {
        Self {
            kind: R::KIND,
            id: item.id(),
            label: item.label(),
        }
    }
}

/// Per-page filters. The free-text search lives in the top bar.
#[derive(Debug, Default, Clone)]
pub struct Filters {
    pub department_college: Option<i32>,
    pub program_department: Option<i32>,
    pub staff_department: Option<i32>,
    pub staff_active: Option<bool>,
    pub classroom_building: Option<i32>,
    pub classroom_available: Option<bool>,
}

/// Selection state of the programs page.
#[derive(Debug, Default, Clone)]
pub struct ProgramSelection {
    pub program_id: Option<i32>,
    pub term_id: Option<i32>,
}

/// Bounded activity log, newest last.
#[derive(Debug)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        self.entries.push_back(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }
}

/// Main application state.
pub struct App {
    // Runtime and API
    pub rt: tokio::runtime::Runtime,
    pub client: ApiClient,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,
    pub pending: usize,

    // Navigation
    pub current_panel: Panel,
    pub sidebar_collapsed: bool,
    pub search: String,

    // Cached data
    pub store: Store,
    pub integrations: Vec<Integration>,

    // Forms and filters
    pub forms: Forms,
    pub filters: Filters,
    pub program_selection: ProgramSelection,

    // Log messages
    pub activity: ActivityLog,

    // Configuration
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub config_modified: bool,
    pub api_status: ApiStatus,

    // Dialogs
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(client: ApiClient, config: AppConfig, config_path: PathBuf, rt: tokio::runtime::Runtime) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut app = Self {
            rt,
            client,
            tx,
            rx,
            pending: 0,
            current_panel: Panel::default(),
            sidebar_collapsed: config.ui.sidebar_collapsed,
            search: String::new(),
            store: Store::default(),
            integrations: default_integrations(),
            forms: Forms::default(),
            filters: Filters::default(),
            program_selection: ProgramSelection::default(),
            activity: ActivityLog::new(config.ui.log_capacity),
            config,
            config_path,
            config_modified: false,
            api_status: ApiStatus::Unknown,
            delete_target: None,
            error_message: None,
            success_message: None,
        };

        app.check_api_health();
        app.refresh_all();

        app
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.activity.push(level, message);
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Switch panel, clearing the page search.
    pub fn navigate(&mut self, panel: Panel) {
        if self.current_panel != panel {
            tracing::debug!("Navigate to {}", panel.name());
            self.current_panel = panel;
            self.search.clear();
        }
    }

    /// Reload every top-level list.
    pub fn refresh_all(&mut self) {
        self.load::<College>();
        self.load::<Department>();
        self.load::<Program>();
        self.load::<Staff>();
        self.load::<Building>();
        self.load::<Classroom>();
        if let Some(program_id) = self.program_selection.program_id {
            self.load_program_structure(program_id);
        }
    }

    fn spawn_fetch<R, F, Fut>(&mut self, program_id: Option<i32>, fetch: F)
    where
        R: Cached,
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Vec<R>>> + Send + 'static,
    {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.pending += 1;

        self.rt.spawn(async move {
            let msg = match fetch(client).await {
                Ok(items) => match program_id {
                    Some(id) => UiMessage::StructureLoaded(id, R::listing(items)),
                    None => UiMessage::Loaded(R::listing(items)),
                },
                Err(e) => UiMessage::LoadFailed(R::KIND, e.to_string()),
            };
            let _ = tx.send(msg);
        });
    }

    /// Load a whole collection.
    pub fn load<R: Cached>(&mut self) {
        self.spawn_fetch(None, |client: ApiClient| async move { services::list::<R>(&client).await });
    }

    /// Load levels, terms, and courses of one program.
    pub fn load_program_structure(&mut self, program_id: i32) {
        let scope = Some(program_id);
        self.spawn_fetch(scope, move |client: ApiClient| async move {
            program_levels::list_by_program(&client, program_id).await
        });
        self.spawn_fetch(scope, move |client: ApiClient| async move {
            program_terms::list_by_program(&client, program_id).await
        });
        self.spawn_fetch(scope, move |client: ApiClient| async move {
            program_courses::list_by_program(&client, program_id).await
        });
    }

    /// Select a program on the programs page and fetch its structure.
    pub fn select_program(&mut self, program_id: Option<i32>) {
        if self.program_selection.program_id == program_id {
            return;
        }
        self.program_selection = ProgramSelection {
            program_id,
            ..Default::default()
        };
        self.store.levels.clear();
        self.store.terms.clear();
        self.store.courses.clear();
        if let Some(id) = program_id {
            self.load_program_structure(id);
        }
    }

    fn spawn_save<R, F, Fut>(&mut self, op: F)
    where
        R: Cached,
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: Future<Output = Result<R>> + Send + 'static,
    {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.pending += 1;

        self.rt.spawn(async move {
            let msg = match op(client).await {
                Ok(item) => UiMessage::Saved(item.record()),
                Err(e) => UiMessage::OperationFailed(e.to_string()),
            };
            let _ = tx.send(msg);
        });
    }

    /// Create a record.
    pub fn create<R: Cached>(&mut self, data: R::Create) {
        self.spawn_save(move |client: ApiClient| async move { services::create::<R>(&client, &data).await });
    }

    /// Update a record.
    pub fn update<R: Cached>(&mut self, id: i32, data: R::Update) {
        self.spawn_save(move |client: ApiClient| async move { services::update::<R>(&client, id, &data).await });
    }

    /// Delete a record.
    pub fn delete<R: Cached>(&mut self, id: i32) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.pending += 1;

        self.rt.spawn(async move {
            let msg = match services::delete::<R>(&client, id).await {
                Ok(()) => UiMessage::Deleted(R::KIND, id),
                Err(e) => UiMessage::OperationFailed(e.to_string()),
            };
            let _ = tx.send(msg);
        });
    }

    /// Validate a form and dispatch the create or update.
    ///
    /// Returns `false` and shows the validation error when the form is rejected.
    pub fn submit<F>(&mut self, form: &F) -> bool
    where
        F: EntityForm,
        F::Target: Cached,
    {
        match form.submission() {
            Ok(Submission::Create(data)) => {
                self.create::<F::Target>(data);
                true
            }
            Ok(Submission::Update(id, data)) => {
                self.update::<F::Target>(id, data);
                true
            }
            Err(msg) => {
                self.error_message = Some(msg);
                false
            }
        }
    }

    /// Place a term in a level, enforcing the level rules locally first.
    ///
    /// The local term moves at once so later checks count it; a refused
    /// request moves it back.
    pub fn assign_term_to_level(&mut self, term_id: i32, level_id: i32) {
        let term = self.store.terms.iter().find(|t| t.id == term_id).cloned();
        let level = self.store.levels.iter().find(|l| l.id == level_id).cloned();
        let (Some(term), Some(level)) = (term, level) else {
            self.error_message = Some("Term or level no longer exists".to_string());
            return;
        };

        if let Err(e) = crate::models::program_term::check_level_assignment(&self.store.terms, &term, &level) {
            self.error_message = Some(e.to_string());
            return;
        }

        let known = self.store.terms.clone();
        self.spawn_level_change(term_id, Some(level_id), move |client: ApiClient| async move {
            program_terms::assign_to_level(&client, &known, &term, &level).await
        });
    }

    /// Detach a term from its level.
    pub fn unassign_term(&mut self, term_id: i32) {
        self.spawn_level_change(term_id, None, move |client: ApiClient| async move {
            program_terms::unassign_level(&client, term_id).await
        });
    }

    fn spawn_level_change<F, Fut>(&mut self, term_id: i32, level_id: Option<i32>, op: F)
    where
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: Future<Output = Result<ProgramTerm>> + Send + 'static,
    {
        let Some(term) = self.store.terms.iter_mut().find(|t| t.id == term_id) else {
            return;
        };
        let previous = std::mem::replace(&mut term.level_id, level_id);

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.pending += 1;

        self.rt.spawn(async move {
            let msg = match op(client).await {
                Ok(term) => UiMessage::Saved(term.record()),
                Err(e) => UiMessage::LevelChangeFailed {
                    term_id,
                    attempted: level_id,
                    previous,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Ask the API for its health status.
    pub fn check_api_health(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.api_status = ApiStatus::Checking;
        self.pending += 1;

        self.rt.spawn(async move {
            let result = client.health_check().await.map_err(|e| e.to_string());
            let _ = tx.send(UiMessage::HealthChecked(result));
        });
    }

    /// Rebuild the API client after settings changed.
    pub fn reconnect(&mut self) {
        match ApiClient::new(&self.config.api) {
            Ok(client) => {
                self.client = client;
                self.log_info(format!("API endpoint set to {}", self.config.api.base_url));
                self.check_api_health();
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to create API client: {e}"));
            }
        }
    }

    /// Validate, save, and apply the edited configuration.
    pub fn save_config(&mut self) {
        if let Err(e) = self.config.validate() {
            self.error_message = Some(e.to_string());
            return;
        }

        match self.config.save(&self.config_path) {
            Ok(()) => {
                tracing::info!("Config saved to {:?}", self.config_path);
                self.config_modified = false;
                self.activity.set_capacity(self.config.ui.log_capacity);
                self.success_message = Some("Settings saved".to_string());
                self.reconnect();
            }
            Err(e) => {
                tracing::error!("Failed to save config: {}", e);
                self.error_message = Some(format!("Failed to save settings: {e}"));
            }
        }
    }

    /// Export the staff list as currently filtered.
    pub fn export_staff(&mut self) {
        let staff: Vec<Staff> = super::staff_page::filter(&self.store.staff, &self.filters, &self.search)
            .into_iter()
            .cloned()
            .collect();
        self.export("staff", |path, store| {
            crate::export::export_staff_to_excel(&staff, &store.departments, path)
        });
    }

    /// Export the classroom list as currently filtered.
    pub fn export_classrooms(&mut self) {
        let rooms: Vec<Classroom> = super::classrooms_page::filter(&self.store.classrooms, &self.filters, &self.search)
            .into_iter()
            .cloned()
            .collect();
        self.export("classrooms", |path, store| {
            crate::export::export_classrooms_to_excel(&rooms, &store.buildings, path)
        });
    }

    fn export<F>(&mut self, prefix: &str, write: F)
    where
        F: FnOnce(&std::path::Path, &Store) -> Result<()>,
    {
        let filename = crate::export::generate_export_filename(prefix);
        let Some(path) = crate::export::show_save_dialog(&filename) else {
            return;
        };

        match write(&path, &self.store) {
            Ok(()) => {
                self.success_message = Some(format!("Exported to: {}", path.display()));
                self.log_success(format!("Exported {prefix}: {}", path.display()));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {e}"));
                self.log_error(format!("Export failed: {e}"));
            }
        }
    }

    /// Execute the confirmed delete operation.
    pub fn confirm_delete(&mut self) {
        let Some(target) = self.delete_target.take() else {
            return;
        };

        self.log_info(format!("Deleting {}: {}", target.kind.name().to_lowercase(), target.label));
        match target.kind {
            EntityKind::College => self.delete::<College>(target.id),
            EntityKind::Department => self.delete::<Department>(target.id),
            EntityKind::Program => self.delete::<Program>(target.id),
            EntityKind::ProgramLevel => self.delete::<ProgramLevel>(target.id),
            EntityKind::ProgramTerm => self.delete::<ProgramTerm>(target.id),
            EntityKind::ProgramCourse => self.delete::<ProgramCourse>(target.id),
            EntityKind::Staff => self.delete::<Staff>(target.id),
            EntityKind::Building => self.delete::<Building>(target.id),
            EntityKind::Classroom => self.delete::<Classroom>(target.id),
        }
    }

    /// Close the form matching a saved record.
    fn close_form(&mut self, kind: EntityKind) {
        let forms = &mut self.forms;
        match kind {
            EntityKind::College => forms.college = Default::default(),
            EntityKind::Department => forms.department = Default::default(),
            EntityKind::Program => forms.program = Default::default(),
            EntityKind::ProgramLevel => forms.level = Default::default(),
            EntityKind::ProgramTerm => forms.term = Default::default(),
            EntityKind::ProgramCourse => forms.course = Default::default(),
            EntityKind::Staff => forms.staff = Default::default(),
            EntityKind::Building => forms.building = Default::default(),
            EntityKind::Classroom => forms.classroom = Default::default(),
        }
    }

    /// Poll async operation results.
    pub fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, msg: UiMessage) {
        match msg {
            UiMessage::Loaded(listing) => {
                self.store.apply_listing(listing);
            }
            UiMessage::StructureLoaded(program_id, listing) => {
                if self.program_selection.program_id == Some(program_id) {
                    self.store.apply_listing(listing);
                } else {
                    tracing::debug!("Dropping listing for program {} no longer selected", program_id);
                }
            }
            UiMessage::LoadFailed(kind, e) => {
                tracing::warn!("Loading {} list failed: {}", kind.name(), e);
                self.log_error(format!("Failed to load {} list: {}", kind.name().to_lowercase(), e));
            }
            UiMessage::Saved(record) => {
                let (kind, label) = match record.program_id() {
                    Some(id) if self.program_selection.program_id != Some(id) => {
                        let (kind, label) = record.summary();
                        tracing::debug!("Not caching {} of program {} no longer selected", kind.name(), id);
                        (kind, label)
                    }
                    _ => self.store.apply_record(record),
                };
                self.close_form(kind);
                self.log_success(format!("{} '{}' saved", kind.name(), label));
            }
            UiMessage::Deleted(kind, id) => {
                self.store.apply_delete(kind, id);
                if kind == EntityKind::Program && self.program_selection.program_id == Some(id) {
                    self.select_program(None);
                }
                if kind == EntityKind::ProgramTerm && self.program_selection.term_id == Some(id) {
                    self.program_selection.term_id = None;
                }
                // Server detaches terms from a removed level
                if kind == EntityKind::ProgramLevel {
                    for term in self.store.terms.iter_mut().filter(|t| t.level_id == Some(id)) {
                        term.level_id = None;
                    }
                }
                self.success_message = Some(format!("{} deleted", kind.name()));
                self.log_success(format!("{} deleted", kind.name()));
            }
            UiMessage::OperationFailed(e) => {
                self.error_message = Some(e.clone());
                self.log_error(e);
            }
            UiMessage::LevelChangeFailed {
                term_id,
                attempted,
                previous,
                error,
            } => {
                if let Some(term) = self.store.terms.iter_mut().find(|t| t.id == term_id)
                    && term.level_id == attempted
                {
                    term.level_id = previous;
                }
                self.error_message = Some(error.clone());
                self.log_error(error);
            }
            UiMessage::HealthChecked(result) => {
                self.api_status = match result {
                    Ok(true) => {
                        self.log_success("API reachable");
                        ApiStatus::Online
                    }
                    Ok(false) => {
                        self.log_warning("API health endpoint returned an error status");
                        ApiStatus::Offline("Unhealthy".to_string())
                    }
                    Err(e) => {
                        self.log_error(format!("API unreachable: {e}"));
                        ApiStatus::Offline(e)
                    }
                };
            }
        }
    }
}

/// Case-insensitive match of `needle` against any of `fields`.
pub fn matches_search(needle: &str, fields: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_log_is_bounded() {
        let mut log = ActivityLog::new(3);
        for i in 0..5 {
            log.push(LogLevel::Info, format!("entry {i}"));
        }
        assert_eq!(log.len(), 3);
        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["entry 2", "entry 3", "entry 4"]);
    }

    #[test]
    fn test_activity_log_shrinks_on_capacity_change() {
        let mut log = ActivityLog::new(10);
        for i in 0..10 {
            log.push(LogLevel::Success, format!("entry {i}"));
        }
        log.set_capacity(4);
        assert_eq!(log.len(), 4);
        assert_eq!(log.iter().next().map(|e| e.message.as_str()), Some("entry 6"));
    }

    #[test]
    fn test_matches_search() {
        assert!(matches_search("", &["anything"]));
        assert!(matches_search("  eng ", &["Faculty of Engineering", "ENG"]));
        assert!(!matches_search("law", &["Engineering", "ENG"]));
    }

    #[test]
    fn test_search_hidden_on_non_list_panels() {
        assert!(!Panel::Dashboard.is_searchable());
        assert!(!Panel::Settings.is_searchable());
        assert!(Panel::Classrooms.is_searchable());
        assert!(Panel::Programs.is_searchable());
    }

    #[test]
    fn test_delete_target_of_record() {
        let room = Classroom {
            id: 11,
            building_id: 1,
            room_number: "LT-3".to_string(),
            capacity: 120,
            room_type: Default::default(),
            has_projector: true,
            is_available: true,
        };
        let target = DeleteTarget::of(&room);
        assert_eq!(target.kind, EntityKind::Classroom);
        assert_eq!(target.id, 11);
        assert_eq!(target.label, "LT-3");
    }

    fn offline_app() -> App {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut config = AppConfig::default();
        config.api.base_url = "http://127.0.0.1:9/api".into();
        let client = ApiClient::new(&config.api).unwrap();
        App::new(client, config, PathBuf::from("unused.toml"), rt)
    }

    fn level(id: i32, program_id: i32) -> ProgramLevel {
        ProgramLevel {
            id,
            program_id,
            name: format!("Level {id}"),
            level_number: id as u8,
        }
    }

    fn term(id: i32, program_id: i32, level_id: Option<i32>) -> ProgramTerm {
        ProgramTerm {
            id,
            program_id,
            level_id,
            name: format!("Term {id}"),
            term_number: id as u8,
        }
    }

    fn level_of(app: &App, term_id: i32) -> Option<i32> {
        app.store.terms.iter().find(|t| t.id == term_id).and_then(|t| t.level_id)
    }

    #[test]
    fn test_structure_of_previous_program_discarded() {
        let mut app = offline_app();
        app.select_program(Some(1));
        app.select_program(Some(2));

        app.handle_message(UiMessage::StructureLoaded(1, Listing::Terms(vec![term(10, 1, None)])));
        app.handle_message(UiMessage::StructureLoaded(1, Listing::Levels(vec![level(1, 1)])));
        assert!(app.store.terms.is_empty());
        assert!(app.store.levels.is_empty());

        app.handle_message(UiMessage::StructureLoaded(2, Listing::Terms(vec![term(20, 2, None)])));
        assert_eq!(app.store.terms.len(), 1);
        assert_eq!(app.store.terms[0].id, 20);
    }

    #[test]
    fn test_saved_record_of_previous_program_not_cached() {
        let mut app = offline_app();
        app.select_program(Some(2));
        app.forms.term.is_open = true;

        app.handle_message(UiMessage::Saved(Record::Term(term(10, 1, None))));
        assert!(app.store.terms.is_empty());
        assert!(!app.forms.term.is_open);

        app.handle_message(UiMessage::Saved(Record::Term(term(20, 2, None))));
        assert_eq!(app.store.terms.len(), 1);
    }

    #[test]
    fn test_quick_assignments_respect_level_capacity() {
        let mut app = offline_app();
        app.select_program(Some(1));
        app.store.levels = vec![level(1, 1)];
        app.store.terms = vec![term(1, 1, Some(1)), term(2, 1, None), term(3, 1, None)];

        app.assign_term_to_level(2, 1);
        assert_eq!(level_of(&app, 2), Some(1));
        assert!(app.error_message.is_none());

        app.assign_term_to_level(3, 1);
        assert!(app.error_message.is_some());
        assert_eq!(level_of(&app, 3), None);
    }

    #[test]
    fn test_refused_level_change_rolled_back() {
        let mut app = offline_app();
        app.select_program(Some(1));
        app.store.levels = vec![level(1, 1)];
        app.store.terms = vec![term(2, 1, None)];

        app.assign_term_to_level(2, 1);
        assert_eq!(level_of(&app, 2), Some(1));

        app.handle_message(UiMessage::LevelChangeFailed {
            term_id: 2,
            attempted: Some(1),
            previous: None,
            error: "Server error: level full".to_string(),
        });
        assert_eq!(level_of(&app, 2), None);
        assert_eq!(app.error_message.as_deref(), Some("Server error: level full"));
    }

    #[test]
    fn test_unassign_is_applied_locally() {
        let mut app = offline_app();
        app.select_program(Some(1));
        app.store.terms = vec![term(2, 1, Some(1))];

        app.unassign_term(2);
        assert_eq!(level_of(&app, 2), None);
    }
}
