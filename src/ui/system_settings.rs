//! Settings panel for API connection and UI configuration.

use eframe::egui::{self, RichText};

use super::app::{ApiStatus, App};
use super::components::{colors, panel_header};
use super::dashboard::api_status_display;
use crate::config::AppConfig;

/// Show the settings panel.
pub fn show(app: &mut App, ui: &mut egui::Ui) {
    panel_header(ui, "Settings", &format!("Stored in {}", app.config_path.display()));

    egui::ScrollArea::vertical().show(ui, |ui| {
        // API Configuration
        ui.group(|ui| {
            ui.heading("API Connection");
            ui.add_space(5.0);

            egui::Grid::new("api_settings_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Base URL:");
                    if ui
                        .add(egui::TextEdit::singleline(&mut app.config.api.base_url).desired_width(320.0))
                        .changed()
                    {
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("API Token:");
                    let mut token = app.config.api.token.clone().unwrap_or_default();
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut token)
                                .password(true)
                                .desired_width(320.0)
                                .hint_text("Optional"),
                        )
                        .changed()
                    {
                        app.config.api.token = (!token.trim().is_empty()).then_some(token);
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("Timeout (seconds):");
                    let mut timeout_str = app.config.api.timeout_secs.to_string();
                    if ui.text_edit_singleline(&mut timeout_str).changed()
                        && let Ok(timeout) = timeout_str.parse()
                    {
                        app.config.api.timeout_secs = timeout;
                        app.config_modified = true;
                    }
                    ui.end_row();
                });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let checking = app.api_status == ApiStatus::Checking;
                if ui
                    .add_enabled(!checking, egui::Button::new("Test Connection"))
                    .on_hover_text("Checks the endpoint currently in use. Save to apply edits first.")
                    .clicked()
                {
                    app.check_api_health();
                }

                // Inline status indicator
                let (color, text) = api_status_display(&app.api_status);
                ui.label(RichText::new(text).color(color));
            });
        });

        ui.add_space(15.0);

        // UI Options
        ui.group(|ui| {
            ui.heading("UI Options");
            ui.add_space(5.0);

            if ui.checkbox(&mut app.config.ui.dark_mode, "Dark mode").changed() {
                app.config_modified = true;
            }

            if ui
                .checkbox(&mut app.config.ui.sidebar_collapsed, "Start with sidebar collapsed")
                .changed()
            {
                app.config_modified = true;
            }

            ui.horizontal(|ui| {
                ui.label("Activity log entries:");
                let mut capacity_str = app.config.ui.log_capacity.to_string();
                if ui
                    .add(egui::TextEdit::singleline(&mut capacity_str).desired_width(60.0))
                    .changed()
                    && let Ok(capacity) = capacity_str.parse()
                {
                    app.config.ui.log_capacity = capacity;
                    app.config_modified = true;
                }
            });
        });

        ui.add_space(20.0);

        // Action buttons
        ui.horizontal(|ui| {
            let save_btn = egui::Button::new("Save Settings");
            if ui.add_enabled(app.config_modified, save_btn).clicked() {
                app.save_config();
            }

            if app.config_modified {
                ui.label(RichText::new("(unsaved changes)").color(colors::WARNING).italics());
            }

            if ui.button("Reset to Defaults").clicked() {
                app.config = AppConfig::default();
                app.config_modified = true;
            }
        });
    });
}
