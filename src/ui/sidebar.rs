//! Left navigation sidebar.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{
    BOOKS, BUILDINGS, CARET_DOUBLE_LEFT, CARET_DOUBLE_RIGHT, CHALKBOARD, GEAR, GRADUATION_CAP, HOUSE, PLUGS,
    TREE_STRUCTURE, USERS,
};

use super::app::{App, Panel};

/// Sidebar sections and the panels they hold, in display order.
pub const SECTIONS: &[(&str, &[Panel])] = &[
    ("Overview", &[Panel::Dashboard]),
    ("Academics", &[Panel::Colleges, Panel::Departments, Panel::Programs]),
    ("People", &[Panel::Staff]),
    ("Facilities", &[Panel::Buildings, Panel::Classrooms]),
    ("System", &[Panel::Integrations, Panel::Settings]),
];

/// Phosphor icon for a panel.
pub fn icon(panel: Panel) -> &'static str {
    match panel {
        Panel::Dashboard => HOUSE,
        Panel::Colleges => GRADUATION_CAP,
        Panel::Departments => TREE_STRUCTURE,
        Panel::Programs => BOOKS,
        Panel::Staff => USERS,
        Panel::Buildings => BUILDINGS,
        Panel::Classrooms => CHALKBOARD,
        Panel::Integrations => PLUGS,
        Panel::Settings => GEAR,
    }
}

/// Render the sidebar. Returns the panel to switch to, if any.
pub fn show(app: &mut App, ctx: &egui::Context) -> Option<Panel> {
    let mut next_panel = None;
    let collapsed = app.sidebar_collapsed;
    let width = if collapsed { 48.0 } else { 190.0 };

    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(width)
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if !collapsed {
                    ui.label(RichText::new("Campus Admin").strong().size(16.0));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (toggle, hint) = if collapsed {
                        (CARET_DOUBLE_RIGHT, "Expand sidebar")
                    } else {
                        (CARET_DOUBLE_LEFT, "Collapse sidebar")
                    };
                    if ui.small_button(toggle).on_hover_text(hint).clicked() {
                        app.sidebar_collapsed = !app.sidebar_collapsed;
                    }
                });
            });

            ui.add_space(6.0);
            ui.separator();

            egui::ScrollArea::vertical().id_salt("sidebar_scroll").show(ui, |ui| {
                for (section, panels) in SECTIONS {
                    ui.add_space(8.0);
                    if !collapsed {
                        ui.label(RichText::new(section.to_uppercase()).small().weak());
                        ui.add_space(2.0);
                    }
                    for &panel in *panels {
                        if nav_item(ui, panel, app.current_panel == panel, collapsed) {
                            next_panel = Some(panel);
                        }
                    }
                }
            });
        });

    next_panel
}

fn nav_item(ui: &mut Ui, panel: Panel, selected: bool, collapsed: bool) -> bool {
    let text = if collapsed {
        RichText::new(icon(panel)).size(18.0)
    } else {
        RichText::new(format!("{}  {}", icon(panel), panel.name())).size(14.0)
    };

    let response = ui.add_sized(
        [ui.available_width(), 28.0],
        egui::Button::selectable(selected, text),
    );
    let response = if collapsed {
        response.on_hover_text(panel.name())
    } else {
        response
    };
    response.clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_panel_listed_once() {
        let listed: Vec<Panel> = SECTIONS.iter().flat_map(|(_, panels)| panels.iter().copied()).collect();
        assert_eq!(listed.len(), 9);
        for panel in &listed {
            assert_eq!(listed.iter().filter(|p| *p == panel).count(), 1, "{panel:?} listed twice");
        }
    }
}
