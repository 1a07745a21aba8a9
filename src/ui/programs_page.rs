//! Program management page with level, term, and course detail.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, CARET_RIGHT, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, Filters, matches_search};
use super::components::{
    action_button, colors, danger_action_button, form_buttons, form_window, id_combo, panel_header,
    primary_button_with_icon, section_frame, styled_button, styled_button_with_icon, yes_no,
};
use super::forms::{CourseForm, LevelForm, ProgramForm, TermForm};
use crate::models::program_course::total_credits;
use crate::models::program_term::terms_in_level;
use crate::models::{DegreeType, MAX_TERMS_PER_LEVEL, Program, ProgramCourse, ProgramLevel, ProgramTerm};

/// Programs matching the department filter and search text.
pub fn filter<'a>(programs: &'a [Program], filters: &Filters, search: &str) -> Vec<&'a Program> {
    programs
        .iter()
        .filter(|p| filters.program_department.is_none_or(|id| p.department_id == id))
        .filter(|p| matches_search(search, &[p.name.as_str(), p.code.as_str(), p.degree_type.label()]))
        .collect()
}

/// Courses of one term, ordered by course code.
pub fn courses_of_term(courses: &[ProgramCourse], term_id: i32) -> Vec<&ProgramCourse> {
    let mut found: Vec<_> = courses.iter().filter(|c| c.term_id == term_id).collect();
    found.sort_by(|a, b| a.course_code.cmp(&b.course_code));
    found
}

/// Whether `level` can take `term` without exceeding the per-level limit.
pub fn level_has_room(terms: &[ProgramTerm], term: &ProgramTerm, level: &ProgramLevel) -> bool {
    term.level_id == Some(level.id) || terms_in_level(terms, level.id) < MAX_TERMS_PER_LEVEL
}

/// Deferred user action, applied after rendering.
enum Action {
    SelectProgram(i32),
    SelectTerm(i32),
    EditProgram(ProgramForm),
    NewLevel,
    EditLevel(ProgramLevel),
    NewTerm,
    EditTerm(ProgramTerm),
    NewCourse,
    EditCourse(ProgramCourse),
    Assign { term_id: i32, level_id: i32 },
    Unassign(i32),
    Delete(DeleteTarget),
}

pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Programs", "Degree programs with their levels, terms, and courses");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Program").clicked() {
            app.forms.program = ProgramForm::open_new(app.filters.program_department);
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load::<Program>();
            if let Some(id) = app.program_selection.program_id {
                app.load_program_structure(id);
            }
        }

        ui.add_space(20.0);

        ui.label("Department:");
        let options = app.store.department_options();
        id_combo(ui, "program_dept_filter", &mut app.filters.program_department, &options, Some("All"));

        if app.filters.program_department.is_some() {
            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.filters.program_department = None;
            }
        }
    });

    ui.add_space(15.0);

    let mut actions = Vec::new();

    show_program_table(app, ui, &mut actions);

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    if let Some(program) = app
        .program_selection
        .program_id
        .and_then(|id| app.store.programs.iter().find(|p| p.id == id))
    {
        ui.label(RichText::new(format!("{} ({})", program.name, program.code)).size(18.0).strong());
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            show_levels_and_terms(app, &mut columns[0], &mut actions);
            show_courses(app, &mut columns[1], &mut actions);
        });
    } else {
        ui.label(RichText::new("Select a program to manage its levels, terms, and courses").weak());
    }

    apply_actions(app, actions);

    let ctx = ui.ctx().clone();
    if app.forms.program.is_open {
        show_program_form(app, &ctx);
    }
    if app.forms.level.is_open {
        show_level_form(app, &ctx);
    }
    if app.forms.term.is_open {
        show_term_form(app, &ctx);
    }
    if app.forms.course.is_open {
        show_course_form(app, &ctx);
    }
}

fn apply_actions(app: &mut App, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::SelectProgram(id) => app.select_program(Some(id)),
            Action::SelectTerm(id) => app.program_selection.term_id = Some(id),
            Action::EditProgram(form) => app.forms.program = form,
            Action::NewLevel => {
                if let Some(program_id) = app.program_selection.program_id {
                    app.forms.level = LevelForm::open_new(program_id, &app.store.levels);
                }
            }
            Action::EditLevel(level) => app.forms.level = LevelForm::edit(&level),
            Action::NewTerm => {
                if let Some(program_id) = app.program_selection.program_id {
                    app.forms.term = TermForm::open_new(program_id, &app.store.terms);
                }
            }
            Action::EditTerm(term) => app.forms.term = TermForm::edit(&term),
            Action::NewCourse => {
                if let Some(program_id) = app.program_selection.program_id {
                    app.forms.course = CourseForm::open_new(program_id, app.program_selection.term_id);
                }
            }
            Action::EditCourse(course) => app.forms.course = CourseForm::edit(&course),
            Action::Assign { term_id, level_id } => app.assign_term_to_level(term_id, level_id),
            Action::Unassign(term_id) => app.unassign_term(term_id),
            Action::Delete(target) => app.delete_target = Some(target),
        }
    }
}

fn show_program_table(app: &App, ui: &mut Ui, actions: &mut Vec<Action>) {
    let filtered = filter(&app.store.programs, &app.filters, &app.search);

    ui.label(format!(
        "Showing {} of {} programs",
        filtered.len(),
        app.store.programs.len()
    ));
    ui.add_space(6.0);

    ScrollArea::vertical()
        .id_salt("programs_scroll")
        .max_height(220.0)
        .show(ui, |ui| {
            egui::Grid::new("programs_grid")
                .num_columns(7)
                .striped(true)
                .min_col_width(50.0)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("Code");
                    ui.strong("Name");
                    ui.strong("Department");
                    ui.strong("Degree");
                    ui.strong("Years");
                    ui.strong("Active");
                    ui.strong("Actions");
                    ui.end_row();

                    for program in filtered {
                        let selected = app.program_selection.program_id == Some(program.id);
                        ui.label(&program.code);
                        if ui.selectable_label(selected, &program.name).clicked() {
                            actions.push(Action::SelectProgram(program.id));
                        }
                        ui.label(app.store.department_name(program.department_id).unwrap_or("-"));
                        ui.label(program.degree_type.label());
                        ui.label(program.duration_years.to_string());
                        ui.label(yes_no(program.is_active));

                        ui.horizontal(|ui| {
                            if action_button(ui, CARET_RIGHT, "Open").clicked() {
                                actions.push(Action::SelectProgram(program.id));
                            }
                            if action_button(ui, PENCIL, "Edit").clicked() {
                                actions.push(Action::EditProgram(ProgramForm::edit(program)));
                            }
                            if danger_action_button(ui, TRASH, "Delete").clicked() {
                                actions.push(Action::Delete(DeleteTarget::of(program)));
                            }
                        });

                        ui.end_row();
                    }
                });
        });
}

fn show_levels_and_terms(app: &App, ui: &mut Ui, actions: &mut Vec<Action>) {
    let store = &app.store;

    section_frame(ui).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(RichText::new("Levels").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button(format!("{PLUS} Level")).clicked() {
                    actions.push(Action::NewLevel);
                }
            });
        });
        ui.add_space(6.0);

        if store.levels.is_empty() {
            ui.label(RichText::new("No levels defined").weak());
        }

        for level in &store.levels {
            let count = terms_in_level(&store.terms, level.id);
            ui.horizontal(|ui| {
                ui.label(RichText::new(&level.name).strong());
                let color = if count >= MAX_TERMS_PER_LEVEL {
                    colors::WARNING
                } else {
                    colors::NEUTRAL
                };
                ui.colored_label(color, format!("{count}/{MAX_TERMS_PER_LEVEL} terms"));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if danger_action_button(ui, TRASH, "Delete level").clicked() {
                        actions.push(Action::Delete(DeleteTarget::of(level)));
                    }
                    if action_button(ui, PENCIL, "Edit level").clicked() {
                        actions.push(Action::EditLevel(level.clone()));
                    }
                });
            });
        }

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Terms").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button(format!("{PLUS} Term")).clicked() {
                    actions.push(Action::NewTerm);
                }
            });
        });
        ui.add_space(6.0);

        if store.terms.is_empty() {
            ui.label(RichText::new("No terms defined").weak());
        }

        egui::Grid::new("terms_grid")
            .num_columns(3)
            .striped(true)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                for term in &store.terms {
                    let selected = app.program_selection.term_id == Some(term.id);
                    if ui.selectable_label(selected, &term.name).clicked() {
                        actions.push(Action::SelectTerm(term.id));
                    }

                    level_combo(ui, store.levels.as_slice(), &store.terms, term, actions);

                    ui.horizontal(|ui| {
                        if action_button(ui, PENCIL, "Edit term").clicked() {
                            actions.push(Action::EditTerm(term.clone()));
                        }
                        if danger_action_button(ui, TRASH, "Delete term").clicked() {
                            actions.push(Action::Delete(DeleteTarget::of(term)));
                        }
                    });
                    ui.end_row();
                }
            });
    });
}

/// Level picker for one term. Full levels are shown disabled.
fn level_combo(
    ui: &mut Ui,
    levels: &[ProgramLevel],
    terms: &[ProgramTerm],
    term: &ProgramTerm,
    actions: &mut Vec<Action>,
) {
    let current = term
        .level_id
        .and_then(|id| levels.iter().find(|l| l.id == id))
        .map(|l| l.name.as_str())
        .unwrap_or("Unassigned");

    egui::ComboBox::from_id_salt(("term_level", term.id))
        .width(140.0)
        .selected_text(current)
        .show_ui(ui, |ui| {
            if ui.selectable_label(term.level_id.is_none(), "Unassigned").clicked() && term.level_id.is_some() {
                actions.push(Action::Unassign(term.id));
            }
            for level in levels {
                let has_room = level_has_room(terms, term, level);
                let response = ui
                    .add_enabled(
                        has_room,
                        egui::Button::selectable(term.level_id == Some(level.id), level.name.as_str()),
                    )
                    .on_disabled_hover_text(format!("{} already has {MAX_TERMS_PER_LEVEL} terms", level.name));
                if response.clicked() && term.level_id != Some(level.id) {
                    actions.push(Action::Assign {
                        term_id: term.id,
                        level_id: level.id,
                    });
                }
            }
        });
}

fn show_courses(app: &App, ui: &mut Ui, actions: &mut Vec<Action>) {
    section_frame(ui).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        let Some(term) = app
            .program_selection
            .term_id
            .and_then(|id| app.store.terms.iter().find(|t| t.id == id))
        else {
            ui.label(RichText::new("Courses").strong());
            ui.add_space(6.0);
            ui.label(RichText::new("Select a term to see its courses").weak());
            return;
        };

        let courses = courses_of_term(&app.store.courses, term.id);

        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Courses: {}", term.name)).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button(format!("{PLUS} Course")).clicked() {
                    actions.push(Action::NewCourse);
                }
            });
        });
        ui.label(
            RichText::new(format!(
                "{} courses, {} credit units",
                courses.len(),
                total_credits(courses.iter().copied())
            ))
            .small()
            .weak(),
        );
        ui.add_space(6.0);

        egui::Grid::new("courses_grid")
            .num_columns(5)
            .striped(true)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Code");
                ui.strong("Title");
                ui.strong("Units");
                ui.strong("Elective");
                ui.strong("");
                ui.end_row();

                for course in courses {
                    ui.label(&course.course_code);
                    ui.label(&course.course_title);
                    ui.label(course.credit_units.to_string());
                    ui.label(yes_no(course.is_elective));
                    ui.horizontal(|ui| {
                        if action_button(ui, PENCIL, "Edit course").clicked() {
                            actions.push(Action::EditCourse(course.clone()));
                        }
                        if danger_action_button(ui, TRASH, "Delete course").clicked() {
                            actions.push(Action::Delete(DeleteTarget::of(course)));
                        }
                    });
                    ui.end_row();
                }
            });
    });
}

fn show_program_form(app: &mut App, ctx: &egui::Context) {
    let title = if app.forms.program.id.is_some() {
        "Edit Program"
    } else {
        "Add Program"
    };

    let departments = app.store.department_options();
    let mut cancel = false;
    let mut save = false;

    form_window(title).show(ctx, |ui| {
        let form = &mut app.forms.program;
        ui.add_space(10.0);

        egui::Grid::new("program_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Department:");
                id_combo(ui, "program_form_dept", &mut form.department_id, &departments, None);
                ui.end_row();

                ui.label("Name:");
                ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(250.0));
                ui.end_row();

                ui.label("Code:");
                ui.add(egui::TextEdit::singleline(&mut form.code).desired_width(100.0));
                ui.end_row();

                ui.label("Degree:");
                egui::ComboBox::from_id_salt("program_form_degree")
                    .width(180.0)
                    .selected_text(form.degree_type.label())
                    .show_ui(ui, |ui| {
                        for degree in DegreeType::ALL {
                            ui.selectable_value(&mut form.degree_type, degree, degree.label());
                        }
                    });
                ui.end_row();

                ui.label("Duration (years):");
                ui.add(egui::TextEdit::singleline(&mut form.duration_years).desired_width(60.0));
                ui.end_row();

                ui.label("Active:");
                ui.checkbox(&mut form.is_active, "");
                ui.end_row();
            });

        (cancel, save) = form_buttons(ui);
    });

    if cancel {
        app.forms.program = ProgramForm::default();
    } else if save {
        let form = app.forms.program.clone();
        app.submit(&form);
    }
}

fn show_level_form(app: &mut App, ctx: &egui::Context) {
    let title = if app.forms.level.id.is_some() {
        "Edit Level"
    } else {
        "Add Level"
    };

    let mut cancel = false;
    let mut save = false;

    form_window(title).show(ctx, |ui| {
        let form = &mut app.forms.level;
        ui.add_space(10.0);

        egui::Grid::new("level_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut form.name)
                        .desired_width(200.0)
                        .hint_text("e.g. 100 Level"),
                );
                ui.end_row();

                ui.label("Level Number:");
                ui.add(egui::TextEdit::singleline(&mut form.level_number).desired_width(60.0));
                ui.end_row();
            });

        (cancel, save) = form_buttons(ui);
    });

    if cancel {
        app.forms.level = LevelForm::default();
    } else if save {
        let form = app.forms.level.clone();
        app.submit(&form);
    }
}

fn show_term_form(app: &mut App, ctx: &egui::Context) {
    let title = if app.forms.term.id.is_some() {
        "Edit Term"
    } else {
        "Add Term"
    };

    let mut cancel = false;
    let mut save = false;

    form_window(title).show(ctx, |ui| {
        let form = &mut app.forms.term;
        ui.add_space(10.0);

        egui::Grid::new("term_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut form.name)
                        .desired_width(200.0)
                        .hint_text("e.g. First Semester"),
                );
                ui.end_row();

                ui.label("Term Number:");
                ui.add(egui::TextEdit::singleline(&mut form.term_number).desired_width(60.0));
                ui.end_row();
            });

        ui.add_space(5.0);
        ui.label(RichText::new("Assign the term to a level from the term list.").small().weak());

        (cancel, save) = form_buttons(ui);
    });

    if cancel {
        app.forms.term = TermForm::default();
    } else if save {
        let form = app.forms.term.clone();
        app.submit(&form);
    }
}

fn show_course_form(app: &mut App, ctx: &egui::Context) {
    let title = if app.forms.course.id.is_some() {
        "Edit Course"
    } else {
        "Add Course"
    };

    let terms: Vec<(i32, String)> = app.store.terms.iter().map(|t| (t.id, t.name.clone())).collect();
    let mut cancel = false;
    let mut save = false;

    form_window(title).show(ctx, |ui| {
        let form = &mut app.forms.course;
        ui.add_space(10.0);

        egui::Grid::new("course_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Term:");
                id_combo(ui, "course_form_term", &mut form.term_id, &terms, None);
                ui.end_row();

                ui.label("Course Code:");
                ui.add(
                    egui::TextEdit::singleline(&mut form.course_code)
                        .desired_width(120.0)
                        .hint_text("e.g. CSC 101"),
                );
                ui.end_row();

                ui.label("Title:");
                ui.add(egui::TextEdit::singleline(&mut form.course_title).desired_width(250.0));
                ui.end_row();

                ui.label("Credit Units:");
                ui.add(egui::TextEdit::singleline(&mut form.credit_units).desired_width(60.0));
                ui.end_row();

                ui.label("Elective:");
                ui.checkbox(&mut form.is_elective, "");
                ui.end_row();
            });

        (cancel, save) = form_buttons(ui);
    });

    if cancel {
        app.forms.course = CourseForm::default();
    } else if save {
        let form = app.forms.course.clone();
        app.submit(&form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(id: i32, level_id: Option<i32>) -> ProgramTerm {
        ProgramTerm {
            id,
            program_id: 1,
            level_id,
            name: format!("Term {id}"),
            term_number: id as u8,
        }
    }

    fn level(id: i32) -> ProgramLevel {
        ProgramLevel {
            id,
            program_id: 1,
            name: format!("{id}00 Level"),
            level_number: id as u8,
        }
    }

    fn course(id: i32, term_id: i32, code: &str, units: u8) -> ProgramCourse {
        ProgramCourse {
            id,
            program_id: 1,
            term_id,
            course_code: code.to_string(),
            course_title: format!("Course {code}"),
            credit_units: units,
            is_elective: false,
        }
    }

    #[test]
    fn test_full_level_has_no_room_for_new_term() {
        let terms = vec![term(1, Some(1)), term(2, Some(1)), term(3, None)];
        assert!(!level_has_room(&terms, &terms[2], &level(1)));
        assert!(level_has_room(&terms, &terms[2], &level(2)));
    }

    #[test]
    fn test_member_of_full_level_keeps_its_place() {
        let terms = vec![term(1, Some(1)), term(2, Some(1))];
        assert!(level_has_room(&terms, &terms[0], &level(1)));
    }

    #[test]
    fn test_courses_of_term_sorted_by_code() {
        let courses = vec![
            course(1, 1, "CSC 201", 3),
            course(2, 2, "MTH 101", 3),
            course(3, 1, "CSC 105", 2),
        ];
        let codes: Vec<_> = courses_of_term(&courses, 1)
            .iter()
            .map(|c| c.course_code.as_str())
            .collect();
        assert_eq!(codes, ["CSC 105", "CSC 201"]);
    }

    #[test]
    fn test_program_filter_by_department() {
        let programs = vec![
            Program {
                id: 1,
                department_id: 1,
                name: "Computer Science".to_string(),
                code: "BSC-CS".to_string(),
                degree_type: DegreeType::Bachelor,
                duration_years: 4,
                is_active: true,
            },
            Program {
                id: 2,
                department_id: 2,
                name: "Public Health".to_string(),
                code: "MPH".to_string(),
                degree_type: DegreeType::Master,
                duration_years: 2,
                is_active: true,
            },
        ];
        let filters = Filters {
            program_department: Some(2),
            ..Default::default()
        };
        let found = filter(&programs, &filters, "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "MPH");

        let masters = filter(&programs, &Filters::default(), "master");
        assert_eq!(masters.len(), 1);
    }
}
