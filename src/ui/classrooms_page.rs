//! Classroom management page with building and availability filters.

use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, FILE_XLS, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, Filters, matches_search};
use super::components::{
    action_button, colors, danger_action_button, form_buttons, form_window, id_combo, panel_header,
    primary_button_with_icon, styled_button, styled_button_with_icon, yes_no,
};
use super::forms::ClassroomForm;
use crate::models::{Classroom, RoomType};

/// Classrooms matching the building and availability filters and the search text.
pub fn filter<'a>(rooms: &'a [Classroom], filters: &Filters, search: &str) -> Vec<&'a Classroom> {
    rooms
        .iter()
        .filter(|r| filters.classroom_building.is_none_or(|id| r.building_id == id))
        .filter(|r| filters.classroom_available.is_none_or(|available| r.is_available == available))
        .filter(|r| matches_search(search, &[r.room_number.as_str(), r.room_type.label()]))
        .collect()
}

/// Total seats across `rooms`.
pub fn total_capacity(rooms: &[&Classroom]) -> u32 {
    rooms.iter().map(|r| r.capacity).sum()
}

pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Classrooms", "Teaching rooms across campus buildings");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Classroom").clicked() {
            app.forms.classroom = ClassroomForm::open_new(app.filters.classroom_building);
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load::<Classroom>();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_classrooms();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: filters
    ui.horizontal(|ui| {
        ui.label("Building:");
        let options = app.store.building_options();
        id_combo(ui, "room_building_filter", &mut app.filters.classroom_building, &options, Some("All"));

        ui.add_space(20.0);

        ui.label("Availability:");
        let available = &mut app.filters.classroom_available;
        ui.selectable_value(available, None, "All");
        ui.selectable_value(available, Some(true), "Available");
        ui.selectable_value(available, Some(false), "Unavailable");

        if !app.search.is_empty()
            || app.filters.classroom_building.is_some()
            || app.filters.classroom_available.is_some()
        {
            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.search.clear();
                app.filters.classroom_building = None;
                app.filters.classroom_available = None;
            }
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.forms.classroom.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let filtered = filter(&app.store.classrooms, &app.filters, &app.search);

    ui.label(format!(
        "Showing {} of {} classrooms, {} seats",
        filtered.len(),
        app.store.classrooms.len(),
        total_capacity(&filtered)
    ));
    ui.add_space(10.0);

    let mut edit = None;
    let mut delete = None;
    let store = &app.store;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(70.0))
        .column(Column::initial(180.0).at_least(100.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(24.0, |mut header| {
            for title in ["Room", "Building", "Type", "Capacity", "Projector", "Status", "Actions"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for room in filtered {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&room.room_number);
                    });
                    row.col(|ui| {
                        ui.label(store.building_name(room.building_id).unwrap_or("-"));
                    });
                    row.col(|ui| {
                        ui.label(room.room_type.label());
                    });
                    row.col(|ui| {
                        ui.label(room.capacity.to_string());
                    });
                    row.col(|ui| {
                        ui.label(yes_no(room.has_projector));
                    });
                    row.col(|ui| {
                        if room.is_available {
                            ui.colored_label(colors::SUCCESS, "Available");
                        } else {
                            ui.colored_label(colors::WARNING, "Unavailable");
                        }
                    });
                    row.col(|ui| {
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            edit = Some(ClassroomForm::edit(room));
                        }
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            delete = Some(DeleteTarget::of(room));
                        }
                    });
                });
            }
        });

    if let Some(form) = edit {
        app.forms.classroom = form;
    }
    if delete.is_some() {
        app.delete_target = delete;
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.forms.classroom.id.is_some() {
        "Edit Classroom"
    } else {
        "Add Classroom"
    };

    let buildings = app.store.building_options();
    let mut cancel = false;
    let mut save = false;

    form_window(title).show(ctx, |ui| {
        let form = &mut app.forms.classroom;
        ui.add_space(10.0);

        egui::Grid::new("classroom_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Building:");
                id_combo(ui, "room_form_building", &mut form.building_id, &buildings, None);
                ui.end_row();

                ui.label("Room Number:");
                ui.add(
                    egui::TextEdit::singleline(&mut form.room_number)
                        .desired_width(120.0)
                        .hint_text("e.g. LT-101"),
                );
                ui.end_row();

                ui.label("Capacity:");
                ui.add(egui::TextEdit::singleline(&mut form.capacity).desired_width(80.0));
                ui.end_row();

                ui.label("Room Type:");
                egui::ComboBox::from_id_salt("room_form_type")
                    .width(180.0)
                    .selected_text(form.room_type.label())
                    .show_ui(ui, |ui| {
                        for room_type in RoomType::ALL {
                            ui.selectable_value(&mut form.room_type, room_type, room_type.label());
                        }
                    });
                ui.end_row();

                ui.label("Projector:");
                ui.checkbox(&mut form.has_projector, "");
                ui.end_row();

                ui.label("Available:");
                ui.checkbox(&mut form.is_available, "");
                ui.end_row();
            });

        (cancel, save) = form_buttons(ui);
    });

    if cancel {
        app.forms.classroom = ClassroomForm::default();
    } else if save {
        let form = app.forms.classroom.clone();
        app.submit(&form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: i32, building_id: i32, number: &str, capacity: u32, available: bool) -> Classroom {
        Classroom {
            id,
            building_id,
            room_number: number.to_string(),
            capacity,
            room_type: RoomType::LectureHall,
            has_projector: true,
            is_available: available,
        }
    }

    fn rooms() -> Vec<Classroom> {
        vec![
            room(1, 1, "LT-101", 200, true),
            room(2, 1, "LT-102", 150, false),
            room(3, 2, "SR-1", 30, true),
        ]
    }

    #[test]
    fn test_no_filters_returns_all() {
        let rooms = rooms();
        assert_eq!(filter(&rooms, &Filters::default(), "").len(), 3);
    }

    #[test]
    fn test_building_and_availability_combine() {
        let rooms = rooms();
        let filters = Filters {
            classroom_building: Some(1),
            classroom_available: Some(true),
            ..Default::default()
        };
        let found = filter(&rooms, &filters, "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].room_number, "LT-101");
    }

    #[test]
    fn test_search_matches_room_type() {
        let mut rooms = rooms();
        rooms[2].room_type = RoomType::SeminarRoom;
        let found = filter(&rooms, &Filters::default(), "seminar");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);
    }

    #[test]
    fn test_total_capacity() {
        let rooms = rooms();
        let found = filter(&rooms, &Filters::default(), "lt-");
        assert_eq!(total_capacity(&found), 350);
    }
}
