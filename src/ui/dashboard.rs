//! Dashboard panel with stats, navigation cards, quick actions, and activity log.

use eframe::egui::{self, Color32, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{BOOKS, BUILDINGS, CHALKBOARD, GRADUATION_CAP, PLUGS, USERS};

use super::app::{ApiStatus, App, LogLevel, Panel};
use super::components::{colors, dashboard_card, section_frame, stat_card, status_dot};
use super::forms::{ClassroomForm, StaffForm};

/// Show the dashboard panel.
///
/// Returns `Some(panel)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next_panel = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);

        // Header
        ui.label(RichText::new("Campus Admin").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("University Administration Dashboard").size(14.0).weak());

        ui.add_space(30.0);

        // Stat cards row
        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 680.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            let active_colleges = app.store.colleges.iter().filter(|c| c.is_active).count();
            stat_card(
                ui,
                "Colleges",
                &app.store.colleges.len().to_string(),
                &format!("{active_colleges} active"),
            );
            stat_card(
                ui,
                "Programs",
                &app.store.programs.len().to_string(),
                &format!("in {} departments", app.store.departments.len()),
            );
            let active_staff = app.store.staff.iter().filter(|s| s.is_active).count();
            stat_card(
                ui,
                "Staff",
                &app.store.staff.len().to_string(),
                &format!("{active_staff} active"),
            );
            let available_rooms = app.store.classrooms.iter().filter(|c| c.is_available).count();
            stat_card(
                ui,
                "Classrooms",
                &app.store.classrooms.len().to_string(),
                &format!("{available_rooms} available"),
            );
        });

        ui.add_space(30.0);

        // Navigation cards row
        let available = ui.available_width();
        let num_cards = 5.0;
        let spacing = 24.0;
        let total_spacing = spacing * (num_cards - 1.0);
        let card_width = ((available - total_spacing) / num_cards).clamp(140.0, 220.0);
        let card_height = card_width * 0.75;
        let card_size = egui::vec2(card_width, card_height);
        let total_width = card_width * num_cards + total_spacing;
        let start_offset = ((available - total_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(start_offset);

            let cards = [
                ("Colleges", "Faculties and schools", GRADUATION_CAP, Panel::Colleges),
                ("Programs", "Levels, terms, courses", BOOKS, Panel::Programs),
                ("Staff", "Academic and support staff", USERS, Panel::Staff),
                ("Buildings", "Campus facilities", BUILDINGS, Panel::Buildings),
                ("Classrooms", "Rooms and availability", CHALKBOARD, Panel::Classrooms),
            ];
            for (i, (title, description, icon, panel)) in cards.into_iter().enumerate() {
                if i > 0 {
                    ui.add_space(spacing);
                }
                if dashboard_card(ui, title, description, icon, card_size).clicked() {
                    next_panel = Some(panel);
                }
            }
        });

        ui.add_space(30.0);
    });

    // Two-column layout: Quick Actions | Recent Activity
    let available_width = ui.available_width();
    let column_width = (available_width - 40.0) / 2.0;

    ui.horizontal(|ui| {
        ui.add_space(10.0);

        // Left column - Quick Actions
        ui.vertical(|ui| {
            ui.set_width(column_width);

            section_frame(ui).show(ui, |ui| {
                ui.set_min_width(column_width - 30.0);

                ui.label(RichText::new("Quick Actions").strong());
                ui.add_space(10.0);

                if ui.button("Add Staff Member").clicked() {
                    app.forms.staff = StaffForm::open_new();
                    next_panel = Some(Panel::Staff);
                }

                ui.add_space(5.0);

                if ui.button("Add Classroom").clicked() {
                    app.forms.classroom = ClassroomForm::open_new(None);
                    next_panel = Some(Panel::Classrooms);
                }

                ui.add_space(5.0);

                if ui.button("Export Staff List").clicked() {
                    app.export_staff();
                }

                ui.add_space(5.0);

                if ui.button("Refresh All Data").clicked() {
                    app.refresh_all();
                }
            });
        });

        ui.add_space(20.0);

        // Right column - Recent Activity
        ui.vertical(|ui| {
            ui.set_width(column_width);

            section_frame(ui).show(ui, |ui| {
                ui.set_min_width(column_width - 30.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Recent Activity").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if !app.activity.is_empty() && ui.small_button("Clear").clicked() {
                            app.activity.clear();
                        }
                    });
                });
                ui.add_space(10.0);

                ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                    if app.activity.is_empty() {
                        ui.label(RichText::new("No recent activity").weak());
                    } else {
                        for entry in app.activity.iter().rev().take(10) {
                            let color = match entry.level {
                                LogLevel::Info => Color32::GRAY,
                                LogLevel::Success => colors::SUCCESS,
                                LogLevel::Warning => colors::WARNING,
                                LogLevel::Error => colors::ERROR,
                            };

                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                        .small()
                                        .color(Color32::DARK_GRAY),
                                );
                                ui.label(RichText::new(&entry.message).color(color));
                            });
                        }
                    }
                });
            });
        });
    });

    ui.add_space(20.0);

    // System Status Section
    section_frame(ui)
        .outer_margin(Margin::symmetric(10, 0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("System Status").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button(format!("{PLUGS} Integrations")).clicked() {
                        next_panel = Some(Panel::Integrations);
                    }
                });
            });
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("REST API:");
                let (color, text) = api_status_display(&app.api_status);
                status_dot(ui, color, &text);
            });

            ui.horizontal(|ui| {
                ui.label("Endpoint:");
                ui.label(RichText::new(app.client.base_url()).weak());
            });

            let connected = app.integrations.iter().filter(|i| i.connected).count();
            ui.horizontal(|ui| {
                ui.label("Integrations:");
                ui.label(RichText::new(format!("{connected} of {} connected", app.integrations.len())).weak());
            });
        });

    next_panel
}

/// Color and text for the API status indicator.
pub fn api_status_display(status: &ApiStatus) -> (Color32, String) {
    match status {
        ApiStatus::Unknown => (colors::NEUTRAL, "Unknown".to_string()),
        ApiStatus::Checking => (colors::WARNING, "Checking...".to_string()),
        ApiStatus::Online => (colors::SUCCESS, "Online".to_string()),
        ApiStatus::Offline(reason) => (colors::ERROR, format!("Offline ({reason})")),
    }
}
