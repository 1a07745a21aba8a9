//! Staff management page with CRUD, search, filters, and Excel export.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, FILE_XLS, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, Filters, matches_search};
use super::components::{
    action_button, danger_action_button, form_buttons, form_window, id_combo, panel_header, primary_button_with_icon,
    styled_button, styled_button_with_icon, yes_no,
};
use super::forms::StaffForm;
use crate::models::{Staff, StaffPosition};

/// Staff matching the department and status filters and the search text.
pub fn filter<'a>(staff: &'a [Staff], filters: &Filters, search: &str) -> Vec<&'a Staff> {
    staff
        .iter()
        .filter(|s| filters.staff_department.is_none() || s.department_id == filters.staff_department)
        .filter(|s| filters.staff_active.is_none_or(|active| s.is_active == active))
        .filter(|s| {
            matches_search(
                search,
                &[
                    s.staff_number.as_str(),
                    s.first_name.as_str(),
                    s.last_name.as_str(),
                    s.email.as_str(),
                ],
            )
        })
        .collect()
}

/// Show the staff page.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Staff", "Academic and administrative staff");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Staff").clicked() {
            app.forms.staff = StaffForm::open_new();
            app.forms.staff.department_id = app.filters.staff_department;
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load::<Staff>();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_staff();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: filters
    ui.horizontal(|ui| {
        ui.label("Department:");
        let options = app.store.department_options();
        id_combo(ui, "staff_dept_filter", &mut app.filters.staff_department, &options, Some("All"));

        ui.add_space(20.0);

        ui.label("Status:");
        if ui.selectable_label(app.filters.staff_active.is_none(), "All").clicked() {
            app.filters.staff_active = None;
        }
        if ui
            .selectable_label(app.filters.staff_active == Some(true), "Active")
            .clicked()
        {
            app.filters.staff_active = Some(true);
        }
        if ui
            .selectable_label(app.filters.staff_active == Some(false), "Inactive")
            .clicked()
        {
            app.filters.staff_active = Some(false);
        }

        // Clear filters button
        if !app.search.is_empty() || app.filters.staff_department.is_some() || app.filters.staff_active.is_some() {
            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.search.clear();
                app.filters.staff_department = None;
                app.filters.staff_active = None;
            }
        }
    });

    ui.add_space(15.0);

    // Table
    show_table(app, ui);

    // Form dialog
    if app.forms.staff.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let filtered = filter(&app.store.staff, &app.filters, &app.search);

    ui.label(format!("Showing {} of {} staff", filtered.len(), app.store.staff.len()));

    ui.add_space(10.0);

    let mut edit = None;
    let mut delete = None;

    ScrollArea::vertical().id_salt("staff_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("staff_grid")
            .num_columns(7)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Number");
                ui.strong("Name");
                ui.strong("Email");
                ui.strong("Department");
                ui.strong("Position");
                ui.strong("Active");
                ui.strong("Actions");
                ui.end_row();

                // Data rows
                for member in filtered {
                    ui.label(&member.staff_number);
                    ui.label(member.full_name());
                    ui.label(&member.email)
                        .on_hover_text(member.phone.as_deref().unwrap_or("No phone"));

                    let dept_name = member
                        .department_id
                        .and_then(|id| app.store.department_name(id))
                        .unwrap_or("-");
                    ui.label(dept_name);

                    ui.label(member.position.label());
                    ui.label(yes_no(member.is_active));

                    ui.horizontal(|ui| {
                        ui.add_space(8.0);
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            edit = Some(StaffForm::edit(member));
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            delete = Some(DeleteTarget::of(member));
                        }
                    });

                    ui.end_row();
                }
            });
    });

    if let Some(form) = edit {
        app.forms.staff = form;
    }
    if delete.is_some() {
        app.delete_target = delete;
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.forms.staff.id.is_some() {
        "Edit Staff"
    } else {
        "Add Staff"
    };

    let departments = app.store.department_options();
    let mut cancel = false;
    let mut save = false;

    form_window(title).max_height(520.0).show(ctx, |ui| {
        let form = &mut app.forms.staff;
        ui.add_space(10.0);

        ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
            egui::Grid::new("staff_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Staff Number:");
                    ui.add(egui::TextEdit::singleline(&mut form.staff_number).desired_width(150.0));
                    ui.end_row();

                    ui.label("First Name:");
                    ui.add(egui::TextEdit::singleline(&mut form.first_name).desired_width(250.0));
                    ui.end_row();

                    ui.label("Last Name:");
                    ui.add(egui::TextEdit::singleline(&mut form.last_name).desired_width(250.0));
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(250.0));
                    ui.end_row();

                    ui.label("Phone:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.phone)
                            .desired_width(150.0)
                            .hint_text("Optional"),
                    );
                    ui.end_row();

                    ui.label("Department:");
                    id_combo(ui, "staff_form_dept", &mut form.department_id, &departments, Some("None"));
                    ui.end_row();

                    ui.label("Position:");
                    egui::ComboBox::from_id_salt("staff_form_position")
                        .width(180.0)
                        .selected_text(form.position.label())
                        .show_ui(ui, |ui| {
                            for position in StaffPosition::ALL {
                                ui.selectable_value(&mut form.position, position, position.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Active:");
                    ui.checkbox(&mut form.is_active, "");
                    ui.end_row();
                });
        });

        (cancel, save) = form_buttons(ui);
    });

    if cancel {
        app.forms.staff = StaffForm::default();
    } else if save {
        let form = app.forms.staff.clone();
        app.submit(&form);
    }
}
