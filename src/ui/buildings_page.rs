//! Building management page.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, CHALKBOARD, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, Panel, matches_search};
use super::components::{
    action_button, danger_action_button, form_buttons, form_window, panel_header, primary_button_with_icon,
    styled_button_with_icon,
};
use super::forms::BuildingForm;
use crate::models::{Building, Classroom};

pub fn filter<'a>(buildings: &'a [Building], search: &str) -> Vec<&'a Building> {
    buildings
        .iter()
        .filter(|b| {
            matches_search(
                search,
                &[b.name.as_str(), b.code.as_str(), b.location.as_deref().unwrap_or_default()],
            )
        })
        .collect()
}

/// Number of classrooms housed in a building.
pub fn rooms_in_building(classrooms: &[Classroom], building_id: i32) -> usize {
    classrooms.iter().filter(|c| c.building_id == building_id).count()
}

pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Buildings", "Campus buildings and their classrooms");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Building").clicked() {
            app.forms.building = BuildingForm::open_new();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load::<Building>();
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.forms.building.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let filtered = filter(&app.store.buildings, &app.search);

    ui.label(format!(
        "Showing {} of {} buildings",
        filtered.len(),
        app.store.buildings.len()
    ));
    ui.add_space(10.0);

    let mut edit = None;
    let mut delete = None;
    let mut rooms_of = None;

    ScrollArea::vertical().id_salt("buildings_scroll").show(ui, |ui| {
        egui::Grid::new("buildings_grid")
            .num_columns(6)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Code");
                ui.strong("Name");
                ui.strong("Location");
                ui.strong("Floors");
                ui.strong("Rooms");
                ui.strong("Actions");
                ui.end_row();

                for building in filtered {
                    ui.label(&building.code);
                    ui.label(&building.name);
                    ui.label(building.location.as_deref().unwrap_or("-"));
                    ui.label(building.floors.to_string());
                    ui.label(rooms_in_building(&app.store.classrooms, building.id).to_string());

                    ui.horizontal(|ui| {
                        if action_button(ui, CHALKBOARD, "Show classrooms").clicked() {
                            rooms_of = Some(building.id);
                        }
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            edit = Some(BuildingForm::edit(building));
                        }
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            delete = Some(DeleteTarget::of(building));
                        }
                    });

                    ui.end_row();
                }
            });
    });

    if let Some(form) = edit {
        app.forms.building = form;
    }
    if delete.is_some() {
        app.delete_target = delete;
    }
    if let Some(building_id) = rooms_of {
        app.navigate(Panel::Classrooms);
        app.filters.classroom_building = Some(building_id);
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.forms.building.id.is_some() {
        "Edit Building"
    } else {
        "Add Building"
    };

    let mut cancel = false;
    let mut save = false;

    form_window(title).show(ctx, |ui| {
        let form = &mut app.forms.building;
        ui.add_space(10.0);

        egui::Grid::new("building_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(250.0));
                ui.end_row();

                ui.label("Code:");
                ui.add(egui::TextEdit::singleline(&mut form.code).desired_width(100.0));
                ui.end_row();

                ui.label("Location:");
                ui.add(
                    egui::TextEdit::singleline(&mut form.location)
                        .desired_width(250.0)
                        .hint_text("Optional"),
                );
                ui.end_row();

                ui.label("Floors:");
                ui.add(egui::TextEdit::singleline(&mut form.floors).desired_width(60.0));
                ui.end_row();
            });

        (cancel, save) = form_buttons(ui);
    });

    if cancel {
        app.forms.building = BuildingForm::default();
    } else if save {
        let form = app.forms.building.clone();
        app.submit(&form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(id: i32, name: &str, location: Option<&str>) -> Building {
        Building {
            id,
            name: name.to_string(),
            code: format!("B{id}"),
            location: location.map(str::to_string),
            floors: 3,
        }
    }

    fn room(id: i32, building_id: i32) -> Classroom {
        Classroom {
            id,
            building_id,
            room_number: format!("R-{id}"),
            capacity: 40,
            room_type: Default::default(),
            has_projector: false,
            is_available: true,
        }
    }

    #[test]
    fn test_filter_matches_location() {
        let buildings = vec![
            building(1, "Senate House", Some("North Campus")),
            building(2, "Science Block", None),
        ];
        let found = filter(&buildings, "north");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
        assert_eq!(filter(&buildings, "").len(), 2);
    }

    #[test]
    fn test_rooms_in_building() {
        let rooms = vec![room(1, 1), room(2, 2), room(3, 1)];
        assert_eq!(rooms_in_building(&rooms, 1), 2);
        assert_eq!(rooms_in_building(&rooms, 3), 0);
    }
}
