//! Top bar with page title, global search, API status, and refresh.

use eframe::egui::{self, Align, Layout, RichText};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, MAGNIFYING_GLASS};

use super::app::{ApiStatus, App};
use super::components::status_dot;
use super::dashboard::api_status_display;
use super::sidebar;

pub fn show(app: &mut App, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_bar")
        .min_height(44.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let panel = app.current_panel;
                ui.label(RichText::new(format!("{} {}", sidebar::icon(panel), panel.name())).size(20.0).strong());

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let busy = app.pending > 0;
                    if ui
                        .add_enabled(!busy, egui::Button::new(ARROWS_CLOCKWISE))
                        .on_hover_text("Refresh all data")
                        .clicked()
                    {
                        app.log_info("Refreshing all data");
                        app.refresh_all();
                    }
                    if busy {
                        ui.spinner();
                    }

                    ui.add_space(12.0);

                    let (color, text) = api_status_display(&app.api_status);
                    let label = match app.api_status {
                        ApiStatus::Offline(_) => "API: Offline".to_string(),
                        _ => format!("API: {text}"),
                    };
                    ui.scope(|ui| status_dot(ui, color, &label))
                        .response
                        .on_hover_text(format!("{}\n{}", app.client.base_url(), text));

                    ui.add_space(12.0);

                    if panel.is_searchable() {
                        ui.add(
                            egui::TextEdit::singleline(&mut app.search)
                                .desired_width(240.0)
                                .hint_text(format!("{MAGNIFYING_GLASS} Search {}...", panel.name().to_lowercase())),
                        );
                    }
                });
            });
        });
}
