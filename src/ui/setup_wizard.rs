//! First-run setup wizard for configuration.

use crate::client::ApiClient;
use crate::config::AppConfig;
use eframe::egui::{self, RichText};
use std::path::PathBuf;
use std::sync::mpsc;

use super::components::colors;

/// Connection test state.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum ConnectionTestState {
    #[default]
    NotTested,
    Testing,
    Success,
    Failed(String),
}

/// Setup wizard state.
#[derive(Debug)]
pub struct SetupWizard {
    /// Current step (0-2).
    pub current_step: usize,
    /// Configuration being built.
    pub config: AppConfig,
    /// API health check state.
    pub api_test_state: ConnectionTestState,
    /// Wizard completed flag.
    pub completed: bool,
    /// Timeout input as string for text editing.
    timeout_input: String,
    /// Token input; blank means no token.
    token_input: String,
    /// Bumped on every connection edit; results of older checks are ignored.
    test_generation: u64,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl SetupWizard {
    /// Start from `config`, e.g. defaults with a URL override applied.
    pub fn new(config: AppConfig) -> Self {
        Self {
            current_step: 0,
            timeout_input: config.api.timeout_secs.to_string(),
            token_input: config.api.token.clone().unwrap_or_default(),
            config,
            api_test_state: ConnectionTestState::NotTested,
            completed: false,
            test_generation: 0,
        }
    }

    /// Check if user can proceed to next step.
    pub fn can_proceed(&self) -> bool {
        match self.current_step {
            0 => true,
            1 => self.api_test_state == ConnectionTestState::Success && self.config.validate().is_ok(),
            2 => true,
            _ => false,
        }
    }

    /// Any edit of the connection settings invalidates a previous test.
    pub fn connection_changed(&mut self) {
        self.test_generation += 1;
        self.api_test_state = ConnectionTestState::NotTested;
    }

    /// Mark a check as running. Returns the generation its result must carry.
    fn begin_test(&mut self) -> u64 {
        self.api_test_state = ConnectionTestState::Testing;
        self.test_generation
    }

    /// Record a check result unless the connection changed since it started.
    fn finish_test(&mut self, generation: u64, result: Result<(), String>) -> bool {
        if generation != self.test_generation {
            tracing::debug!("Dropping result of outdated connection test");
            return false;
        }
        self.api_test_state = match result {
            Ok(()) => ConnectionTestState::Success,
            Err(e) => ConnectionTestState::Failed(e),
        };
        true
    }

    /// Copy text inputs into the config.
    fn apply_inputs(&mut self) -> Result<(), String> {
        let token = self.token_input.trim();
        self.config.api.token = (!token.is_empty()).then(|| token.to_string());
        self.config.api.timeout_secs = self
            .timeout_input
            .trim()
            .parse()
            .map_err(|_| "Timeout must be a whole number".to_string())?;
        Ok(())
    }

    /// Get step title.
    fn step_title(&self) -> &'static str {
        match self.current_step {
            0 => "Welcome",
            1 => "API Connection",
            2 => "Confirmation",
            _ => "Setup",
        }
    }

    /// Total number of steps.
    const TOTAL_STEPS: usize = 3;
}

/// Setup wizard application.
pub struct SetupApp {
    pub wizard: SetupWizard,
    pub initial_error: Option<String>,
    pub config_path: PathBuf,
    pub rt: tokio::runtime::Runtime,
    api_test_rx: Option<mpsc::Receiver<(u64, Result<(), String>)>>,
}

impl SetupApp {
    pub fn new(
        wizard: SetupWizard,
        initial_error: Option<String>,
        config_path: PathBuf,
        rt: tokio::runtime::Runtime,
    ) -> Self {
        Self {
            wizard,
            initial_error,
            config_path,
            rt,
            api_test_rx: None,
        }
    }

    /// Run the API health check asynchronously.
    fn start_api_test(&mut self) {
        if let Err(e) = self.wizard.apply_inputs() {
            self.wizard.api_test_state = ConnectionTestState::Failed(e);
            return;
        }
        if let Err(e) = self.wizard.config.validate() {
            self.wizard.api_test_state = ConnectionTestState::Failed(e.to_string());
            return;
        }

        let api = self.wizard.config.api.clone();
        let (tx, rx) = mpsc::channel();
        self.api_test_rx = Some(rx);
        let generation = self.wizard.begin_test();

        self.rt.spawn(async move {
            let result = test_api_connection(&api).await;
            let _ = tx.send((generation, result));
        });
    }

    /// Check for async test results.
    fn poll_test_results(&mut self) {
        if let Some(rx) = &self.api_test_rx
            && let Ok((generation, result)) = rx.try_recv()
        {
            self.wizard.finish_test(generation, result);
            self.api_test_rx = None;
        }
    }
}

impl eframe::App for SetupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async test results
        self.poll_test_results();

        // Request repaint while testing
        if self.wizard.api_test_state == ConnectionTestState::Testing {
            ctx.request_repaint();
        }

        // Show initial error dialog
        if let Some(err) = self.initial_error.clone() {
            egui::Window::new("Configuration Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, &err);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.initial_error = None;
                    }
                });
            return;
        }

        // Main wizard panel
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Campus Admin Setup").size(24.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!(
                            "Step {} of {}",
                            self.wizard.current_step + 1,
                            SetupWizard::TOTAL_STEPS
                        ));
                    });
                });

                ui.separator();
                ui.add_space(10.0);

                // Step title
                ui.heading(self.wizard.step_title());
                ui.add_space(20.0);

                // Step content
                let needs_api_test = match self.wizard.current_step {
                    0 => {
                        show_welcome_step(ui);
                        false
                    }
                    1 => show_api_step(ui, &mut self.wizard),
                    2 => {
                        show_confirmation_step(ui, &self.wizard, &self.config_path);
                        false
                    }
                    _ => false,
                };

                if needs_api_test {
                    self.start_api_test();
                }

                ui.add_space(30.0);
                ui.separator();

                // Navigation buttons
                ui.horizontal(|ui| {
                    if self.wizard.current_step > 0 && ui.button("< Back").clicked() {
                        self.wizard.current_step -= 1;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.wizard.current_step < SetupWizard::TOTAL_STEPS - 1 {
                            let btn_text = if self.wizard.current_step == 0 {
                                "Get Started >"
                            } else {
                                "Next >"
                            };
                            let enabled = self.wizard.can_proceed();
                            if ui.add_enabled(enabled, egui::Button::new(btn_text)).clicked() {
                                match self.wizard.apply_inputs() {
                                    Ok(()) => self.wizard.current_step += 1,
                                    Err(e) => self.wizard.api_test_state = ConnectionTestState::Failed(e),
                                }
                            }
                        } else {
                            // Final step - Save & Exit
                            if ui.button("Save & Exit").clicked() {
                                self.wizard.completed = true;
                            }
                        }
                    });
                });
            });
        });

        // Handle completion
        if self.wizard.completed {
            match self.wizard.config.save(&self.config_path) {
                Ok(()) => {
                    tracing::info!("Setup complete, config saved to {:?}", self.config_path);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Err(e) => {
                    tracing::error!("Failed to save config: {}", e);
                    self.initial_error = Some(format!("Failed to save config: {e}"));
                    self.wizard.completed = false;
                }
            }
        }
    }
}

fn show_welcome_step(ui: &mut egui::Ui) {
    ui.label("Welcome to Campus Admin!");
    ui.add_space(10.0);
    ui.label("This wizard will connect the dashboard to your university API.");
    ui.add_space(20.0);
    ui.label("You will need:");
    ui.add_space(5.0);
    ui.label("  - The base URL of the REST API (e.g. https://api.example.edu/api)");
    ui.label("  - An API token, if the server requires one");
}

fn show_api_step(ui: &mut egui::Ui, wizard: &mut SetupWizard) -> bool {
    let mut needs_test = false;
    let mut changed = false;

    egui::Grid::new("api_grid")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("Base URL:");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut wizard.config.api.base_url).desired_width(300.0))
                .changed();
            ui.end_row();

            ui.label("API Token:");
            changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut wizard.token_input)
                        .password(true)
                        .desired_width(300.0)
                        .hint_text("Optional"),
                )
                .changed();
            ui.end_row();

            ui.label("Timeout (seconds):");
            changed |= ui.text_edit_singleline(&mut wizard.timeout_input).changed();
            ui.end_row();
        });

    if changed {
        wizard.connection_changed();
    }

    ui.add_space(20.0);

    ui.horizontal(|ui| {
        let testing = wizard.api_test_state == ConnectionTestState::Testing;
        if ui.add_enabled(!testing, egui::Button::new("Test Connection")).clicked() {
            needs_test = true;
        }

        ui.add_space(10.0);

        match &wizard.api_test_state {
            ConnectionTestState::NotTested => {
                ui.label("Not tested");
            }
            ConnectionTestState::Testing => {
                ui.spinner();
                ui.label("Testing...");
            }
            ConnectionTestState::Success => {
                ui.colored_label(colors::SUCCESS, "API reachable!");
            }
            ConnectionTestState::Failed(e) => {
                ui.colored_label(colors::ERROR, format!("Failed: {e}"));
            }
        }
    });

    needs_test
}

fn show_confirmation_step(ui: &mut egui::Ui, wizard: &SetupWizard, path: &std::path::Path) {
    ui.label("Review your configuration:");
    ui.add_space(10.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading("API");
        ui.label(format!("  {}", wizard.config.api.base_url));
        ui.label(format!(
            "  Token: {}",
            if wizard.config.api.token.is_some() { "set" } else { "none" }
        ));
        ui.label(format!("  Timeout: {} seconds", wizard.config.api.timeout_secs));
    });

    ui.add_space(20.0);
    ui.label(format!("Settings will be written to {}", path.display()));
    ui.label("Click 'Save & Exit' to save and close the wizard.");
    ui.label("You will need to restart the application after setup.");
}

/// Check that the API answers its health endpoint.
async fn test_api_connection(api: &crate::config::ApiConfig) -> Result<(), String> {
    let client = ApiClient::new(api).map_err(|e| e.to_string())?;
    match client.health_check().await {
        Ok(true) => Ok(()),
        Ok(false) => Err("health endpoint returned an error status".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_step_requires_successful_check() {
        let mut wizard = SetupWizard::default();
        assert!(wizard.can_proceed());

        wizard.current_step = 1;
        assert!(!wizard.can_proceed());

        wizard.api_test_state = ConnectionTestState::Failed("refused".to_string());
        assert!(!wizard.can_proceed());

        wizard.api_test_state = ConnectionTestState::Success;
        assert!(wizard.can_proceed());
    }

    #[test]
    fn test_editing_connection_resets_check() {
        let mut wizard = SetupWizard::default();
        wizard.current_step = 1;
        wizard.api_test_state = ConnectionTestState::Success;

        wizard.connection_changed();
        assert_eq!(wizard.api_test_state, ConnectionTestState::NotTested);
        assert!(!wizard.can_proceed());
    }

    #[test]
    fn test_apply_inputs() {
        let mut wizard = SetupWizard::default();
        wizard.token_input = "  secret  ".to_string();
        wizard.timeout_input = "45".to_string();
        assert!(wizard.apply_inputs().is_ok());
        assert_eq!(wizard.config.api.token.as_deref(), Some("secret"));
        assert_eq!(wizard.config.api.timeout_secs, 45);

        wizard.token_input = "   ".to_string();
        assert!(wizard.apply_inputs().is_ok());
        assert!(wizard.config.api.token.is_none());
    }

    #[test]
    fn test_unparsable_timeout_rejected() {
        let mut wizard = SetupWizard::default();
        wizard.timeout_input = "45".to_string();
        assert!(wizard.apply_inputs().is_ok());

        wizard.timeout_input = "abc".to_string();
        assert_eq!(wizard.apply_inputs(), Err("Timeout must be a whole number".to_string()));
        assert_eq!(wizard.config.api.timeout_secs, 45);
    }

    #[test]
    fn test_result_of_outdated_check_ignored() {
        let mut wizard = SetupWizard::default();
        wizard.current_step = 1;

        let generation = wizard.begin_test();
        wizard.config.api.base_url = "https://other.example/api".to_string();
        wizard.connection_changed();

        assert!(!wizard.finish_test(generation, Ok(())));
        assert_eq!(wizard.api_test_state, ConnectionTestState::NotTested);
        assert!(!wizard.can_proceed());

        let generation = wizard.begin_test();
        assert!(wizard.finish_test(generation, Ok(())));
        assert!(wizard.can_proceed());
    }

    #[test]
    fn test_prefilled_from_config() {
        let mut config = AppConfig::default();
        config.api.base_url = "https://api.uni.edu/api".to_string();
        config.api.token = Some("tok".to_string());
        let wizard = SetupWizard::new(config);
        assert_eq!(wizard.token_input, "tok");
        assert_eq!(wizard.config.api.base_url, "https://api.uni.edu/api");
    }
}
