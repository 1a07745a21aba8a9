//! Window layout: top bar, sidebar, status bar, dialogs, and the current page.

use eframe::egui::{self, Align, Layout, RichText};

use super::app::{App, LogLevel, Panel};
use super::components::colors;
use super::{
    buildings_page, classrooms_page, colleges_page, dashboard, departments_page, integration_hub, programs_page,
    sidebar, staff_page, system_settings, top_bar,
};

impl App {
    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    if self.pending > 0 {
                        ui.spinner();
                        ui.label(format!("{} request(s) in flight", self.pending));
                    } else {
                        ui.label("Ready");
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(entry) = self.activity.iter().next_back() {
                            let color = match entry.level {
                                LogLevel::Info => colors::NEUTRAL,
                                LogLevel::Success => colors::SUCCESS,
                                LogLevel::Warning => colors::WARNING,
                                LogLevel::Error => colors::ERROR,
                            };
                            ui.colored_label(color, &entry.message);
                            ui.label(RichText::new(entry.timestamp.format("%H:%M:%S").to_string()).small());
                        }
                    });
                });
            });
    }

    /// Modal dialogs (error, success, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        if let Some(target) = self.delete_target.clone() {
            egui::Window::new(format!("Delete {}", target.kind.name()))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(format!(
                        "Delete {} '{}'?",
                        target.kind.name().to_lowercase(),
                        target.label
                    ));
                    ui.label(RichText::new("This cannot be undone.").small().weak());
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.delete_target = None;
                        }
                        if ui.button(RichText::new("Delete").color(colors::ERROR)).clicked() {
                            self.confirm_delete();
                        }
                    });
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint during async operations
        if self.pending > 0 {
            ctx.request_repaint();
        }

        ctx.set_visuals(if self.config.ui.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        top_bar::show(self, ctx);

        if let Some(next) = sidebar::show(self, ctx) {
            self.navigate(next);
        }

        self.show_status_bar(ctx);

        self.show_dialogs(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
            Panel::Dashboard => {
                egui::ScrollArea::vertical().id_salt("dashboard_scroll").show(ui, |ui| {
                    if let Some(next) = dashboard::show(self, ui) {
                        self.navigate(next);
                    }
                });
            }
            Panel::Colleges => colleges_page::show(self, ui),
            Panel::Departments => departments_page::show(self, ui),
            Panel::Programs => programs_page::show(self, ui),
            Panel::Staff => staff_page::show(self, ui),
            Panel::Buildings => buildings_page::show(self, ui),
            Panel::Classrooms => classrooms_page::show(self, ui),
            Panel::Integrations => integration_hub::show(self, ui),
            Panel::Settings => system_settings::show(self, ui),
        });
    }
}
