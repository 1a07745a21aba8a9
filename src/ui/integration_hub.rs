//! Integration status widgets.
//!
//! Third-party integrations are held locally; only the REST API check talks
//! to a real endpoint.

use chrono::{DateTime, Local};
use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, PLUG, PLUGS_CONNECTED};

use super::app::{ApiStatus, App};
use super::components::{colors, panel_header, section_frame, status_dot, styled_button_with_icon};
use super::dashboard::api_status_display;

/// An external system the dashboard can be linked to.
#[derive(Debug, Clone, PartialEq)]
pub struct Integration {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub connected: bool,
    pub last_sync: Option<DateTime<Local>>,
}

impl Integration {
    fn new(key: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            key,
            name,
            description,
            connected: false,
            last_sync: None,
        }
    }

    /// Flip the connection state. Disconnecting keeps the last sync time.
    pub fn toggle(&mut self) {
        self.connected = !self.connected;
    }

    /// Record a sync at `at`. Returns `false` when not connected.
    pub fn sync_now(&mut self, at: DateTime<Local>) -> bool {
        if !self.connected {
            return false;
        }
        self.last_sync = Some(at);
        true
    }
}

/// The integrations offered out of the box.
pub fn default_integrations() -> Vec<Integration> {
    vec![
        Integration::new("lms", "Learning Management System", "Course content and gradebook"),
        Integration::new("sis", "Student Information System", "Enrolment and student records"),
        Integration::new("payments", "Payment Gateway", "Tuition and fee collection"),
        Integration::new("email", "Email Service", "Notifications and bulk mail"),
        Integration::new("idp", "Identity Provider", "Single sign-on for staff and students"),
    ]
}

/// Show the integrations panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Integrations", "External systems linked to the dashboard");

    // REST API
    section_frame(ui).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new("REST API").strong());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let (color, text) = api_status_display(&app.api_status);
            status_dot(ui, color, &text);
            ui.add_space(10.0);
            ui.label(RichText::new(app.client.base_url()).weak());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let checking = app.api_status == ApiStatus::Checking;
                ui.add_enabled_ui(!checking, |ui| {
                    if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Check Now").clicked() {
                        app.check_api_health();
                    }
                });
            });
        });
    });

    ui.add_space(15.0);

    let mut events = Vec::new();

    egui::ScrollArea::vertical().id_salt("integrations_scroll").show(ui, |ui| {
        for integration in &mut app.integrations {
            section_frame(ui).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(integration.name).strong());
                        ui.label(RichText::new(integration.description).small().weak());
                        let synced = integration
                            .last_sync
                            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                            .unwrap_or_else(|| "Never".to_string());
                        ui.label(RichText::new(format!("Last sync: {synced}")).small());
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let toggle_label = if integration.connected {
                            format!("{PLUG} Disconnect")
                        } else {
                            format!("{PLUGS_CONNECTED} Connect")
                        };
                        if ui.button(toggle_label).clicked() {
                            integration.toggle();
                            let state = if integration.connected { "connected" } else { "disconnected" };
                            events.push(format!("{} {}", integration.name, state));
                        }

                        if ui
                            .add_enabled(integration.connected, egui::Button::new(format!("{ARROWS_CLOCKWISE} Sync Now")))
                            .clicked()
                            && integration.sync_now(Local::now())
                        {
                            events.push(format!("{} synced", integration.name));
                        }

                        ui.add_space(10.0);
                        if integration.connected {
                            status_dot(ui, colors::SUCCESS, "Connected");
                        } else {
                            status_dot(ui, colors::NEUTRAL, "Disconnected");
                        }
                    });
                });
            });
            ui.add_space(8.0);
        }
    });

    for event in events {
        tracing::info!("{}", event);
        app.log_info(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_start_disconnected() {
        let integrations = default_integrations();
        assert_eq!(integrations.len(), 5);
        assert!(integrations.iter().all(|i| !i.connected && i.last_sync.is_none()));
        let keys: Vec<_> = integrations.iter().map(|i| i.key).collect();
        assert_eq!(keys, ["lms", "sis", "payments", "email", "idp"]);
    }

    #[test]
    fn test_sync_requires_connection() {
        let mut lms = default_integrations().remove(0);
        assert!(!lms.sync_now(Local::now()));
        assert!(lms.last_sync.is_none());

        lms.toggle();
        let at = Local::now();
        assert!(lms.sync_now(at));
        assert_eq!(lms.last_sync, Some(at));
    }

    #[test]
    fn test_disconnect_keeps_last_sync() {
        let mut email = default_integrations().remove(3);
        email.toggle();
        email.sync_now(Local::now());
        email.toggle();
        assert!(!email.connected);
        assert!(email.last_sync.is_some());
    }
}
