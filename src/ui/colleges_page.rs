//! College management page.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, matches_search};
use super::components::{
    action_button, danger_action_button, form_buttons, form_window, panel_header, primary_button_with_icon,
    styled_button_with_icon, yes_no,
};
use super::forms::CollegeForm;
use crate::models::College;

/// Colleges matching the search text.
pub fn filter<'a>(colleges: &'a [College], search: &str) -> Vec<&'a College> {
    colleges
        .iter()
        .filter(|c| {
            matches_search(
                search,
                &[c.name.as_str(), c.code.as_str(), c.dean_name.as_deref().unwrap_or_default()],
            )
        })
        .collect()
}

pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Colleges", "Faculties and schools of the university");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add College").clicked() {
            app.forms.college = CollegeForm::open_new();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load::<College>();
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.forms.college.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let filtered = filter(&app.store.colleges, &app.search);

    ui.label(format!("Showing {} of {} colleges", filtered.len(), app.store.colleges.len()));
    ui.add_space(10.0);

    let mut edit = None;
    let mut delete = None;

    ScrollArea::vertical().id_salt("colleges_scroll").show(ui, |ui| {
        egui::Grid::new("colleges_grid")
            .num_columns(6)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Code");
                ui.strong("Name");
                ui.strong("Dean");
                ui.strong("Departments");
                ui.strong("Active");
                ui.strong("Actions");
                ui.end_row();

                for college in filtered {
                    ui.label(&college.code);
                    ui.label(&college.name).on_hover_text(college.description.as_deref().unwrap_or(""));
                    ui.label(college.dean_name.as_deref().unwrap_or("-"));
                    let departments = app
                        .store
                        .departments
                        .iter()
                        .filter(|d| d.college_id == college.id)
                        .count();
                    ui.label(departments.to_string());
                    ui.label(yes_no(college.is_active));

                    ui.horizontal(|ui| {
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            edit = Some(CollegeForm::edit(college));
                        }
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            delete = Some(DeleteTarget::of(college));
                        }
                    });

                    ui.end_row();
                }
            });
    });

    if let Some(form) = edit {
        app.forms.college = form;
    }
    if delete.is_some() {
        app.delete_target = delete;
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.forms.college.id.is_some() {
        "Edit College"
    } else {
        "Add College"
    };

    let mut cancel = false;
    let mut save = false;

    form_window(title).show(ctx, |ui| {
        let form = &mut app.forms.college;
        ui.add_space(10.0);

        egui::Grid::new("college_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(250.0));
                ui.end_row();

                ui.label("Code:");
                ui.add(
                    egui::TextEdit::singleline(&mut form.code)
                        .desired_width(100.0)
                        .hint_text("e.g. ENG"),
                );
                ui.end_row();

                ui.label("Dean:");
                ui.add(
                    egui::TextEdit::singleline(&mut form.dean_name)
                        .desired_width(250.0)
                        .hint_text("Optional"),
                );
                ui.end_row();

                ui.label("Description:");
                ui.add(
                    egui::TextEdit::multiline(&mut form.description)
                        .desired_width(250.0)
                        .desired_rows(3),
                );
                ui.end_row();

                ui.label("Active:");
                ui.checkbox(&mut form.is_active, "");
                ui.end_row();
            });

        (cancel, save) = form_buttons(ui);
    });

    if cancel {
        app.forms.college = CollegeForm::default();
    } else if save {
        let form = app.forms.college.clone();
        app.submit(&form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college(id: i32, name: &str, code: &str, dean: Option<&str>) -> College {
        College {
            id,
            name: name.to_string(),
            code: code.to_string(),
            dean_name: dean.map(str::to_string),
            description: None,
            is_active: true,
        }
    }

    #[test]
    fn test_filter_by_name_code_or_dean() {
        let colleges = vec![
            college(1, "College of Engineering", "ENG", Some("Prof. Adeyemi")),
            college(2, "College of Law", "LAW", None),
        ];

        assert_eq!(filter(&colleges, "").len(), 2);
        assert_eq!(filter(&colleges, "law")[0].id, 2);
        assert_eq!(filter(&colleges, "adeyemi")[0].id, 1);
        assert!(filter(&colleges, "medicine").is_empty());
    }
}
