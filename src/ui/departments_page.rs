//! Department management page.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, Filters, matches_search};
use super::components::{
    action_button, danger_action_button, form_buttons, form_window, id_combo, panel_header, primary_button_with_icon,
    styled_button, styled_button_with_icon, yes_no,
};
use super::forms::DepartmentForm;
use crate::models::Department;

/// Departments matching the college filter and search text.
pub fn filter<'a>(departments: &'a [Department], filters: &Filters, search: &str) -> Vec<&'a Department> {
    departments
        .iter()
        .filter(|d| filters.department_college.is_none_or(|id| d.college_id == id))
        .filter(|d| {
            matches_search(
                search,
                &[d.name.as_str(), d.code.as_str(), d.head_name.as_deref().unwrap_or_default()],
            )
        })
        .collect()
}

pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Departments", "Academic departments grouped by college");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Department").clicked() {
            app.forms.department = DepartmentForm::open_new(app.filters.department_college);
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load::<Department>();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: filter
    ui.horizontal(|ui| {
        ui.label("College:");
        let options = app.store.college_options();
        id_combo(ui, "dept_college_filter", &mut app.filters.department_college, &options, Some("All"));

        if app.filters.department_college.is_some() {
            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.filters.department_college = None;
            }
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.forms.department.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let filtered = filter(&app.store.departments, &app.filters, &app.search);

    ui.label(format!(
        "Showing {} of {} departments",
        filtered.len(),
        app.store.departments.len()
    ));
    ui.add_space(10.0);

    let mut edit = None;
    let mut delete = None;

    ScrollArea::vertical().id_salt("departments_scroll").show(ui, |ui| {
        egui::Grid::new("departments_grid")
            .num_columns(7)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Code");
                ui.strong("Name");
                ui.strong("College");
                ui.strong("Head");
                ui.strong("Programs");
                ui.strong("Active");
                ui.strong("Actions");
                ui.end_row();

                for dept in filtered {
                    ui.label(&dept.code);
                    ui.label(&dept.name);
                    ui.label(app.store.college_name(dept.college_id).unwrap_or("-"));
                    ui.label(dept.head_name.as_deref().unwrap_or("-"));
                    let programs = app
                        .store
                        .programs
                        .iter()
                        .filter(|p| p.department_id == dept.id)
                        .count();
                    ui.label(programs.to_string());
                    ui.label(yes_no(dept.is_active));

                    ui.horizontal(|ui| {
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            edit = Some(DepartmentForm::edit(dept));
                        }
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            delete = Some(DeleteTarget::of(dept));
                        }
                    });

                    ui.end_row();
                }
            });
    });

    if let Some(form) = edit {
        app.forms.department = form;
    }
    if delete.is_some() {
        app.delete_target = delete;
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.forms.department.id.is_some() {
        "Edit Department"
    } else {
        "Add Department"
    };

    let colleges = app.store.college_options();
    let mut cancel = false;
    let mut save = false;

    form_window(title).show(ctx, |ui| {
        let form = &mut app.forms.department;
        ui.add_space(10.0);

        egui::Grid::new("department_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("College:");
                id_combo(ui, "dept_form_college", &mut form.college_id, &colleges, None);
                ui.end_row();

                ui.label("Name:");
                ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(250.0));
                ui.end_row();

                ui.label("Code:");
                ui.add(
                    egui::TextEdit::singleline(&mut form.code)
                        .desired_width(100.0)
                        .hint_text("e.g. CSC"),
                );
                ui.end_row();

                ui.label("Head:");
                ui.add(
                    egui::TextEdit::singleline(&mut form.head_name)
                        .desired_width(250.0)
                        .hint_text("Optional"),
                );
                ui.end_row();

                ui.label("Active:");
                ui.checkbox(&mut form.is_active, "");
                ui.end_row();
            });

        (cancel, save) = form_buttons(ui);
    });

    if cancel {
        app.forms.department = DepartmentForm::default();
    } else if save {
        let form = app.forms.department.clone();
        app.submit(&form);
    }
}
