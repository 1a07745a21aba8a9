//! Excel export functionality.

use crate::error::Result;
use crate::models::{Building, Classroom, Department, Staff};
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet};
use std::path::{Path, PathBuf};

/// Bold white-on-blue header row.
fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin)
}

/// Write headers with their column widths, freeze the header row, and add an autofilter over `rows`.
fn write_header(worksheet: &mut Worksheet, columns: &[(&str, f64)], rows: usize) -> Result<()> {
    let format = header_format();
    for (col, (header, width)) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &format)?;
        worksheet.set_column_width(col as u16, *width)?;
    }

    if rows > 0 {
        worksheet.autofilter(0, 0, rows as u32, (columns.len() - 1) as u16)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Export staff to Excel file.
pub fn export_staff_to_excel(staff: &[Staff], departments: &[Department], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Staff")?;

    let columns = [
        ("Staff Number", 15.0),
        ("First Name", 18.0),
        ("Last Name", 18.0),
        ("Email", 30.0),
        ("Phone", 16.0),
        ("Department", 25.0),
        ("Position", 18.0),
        ("Active", 8.0),
    ];
    write_header(worksheet, &columns, staff.len())?;

    for (idx, member) in staff.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &member.staff_number)?;
        worksheet.write_string(row, 1, &member.first_name)?;
        worksheet.write_string(row, 2, &member.last_name)?;
        worksheet.write_string(row, 3, &member.email)?;
        worksheet.write_string(row, 4, member.phone.as_deref().unwrap_or(""))?;

        let dept_name = member
            .department_id
            .and_then(|id| departments.iter().find(|d| d.id == id))
            .map(|d| d.name.as_str())
            .unwrap_or("");
        worksheet.write_string(row, 5, dept_name)?;

        worksheet.write_string(row, 6, member.position.label())?;
        worksheet.write_string(row, 7, if member.is_active { "Yes" } else { "No" })?;
    }

    workbook.save(path)?;
    tracing::info!("Exported {} staff records to {:?}", staff.len(), path);
    Ok(())
}

/// Export classrooms to Excel file.
pub fn export_classrooms_to_excel(rooms: &[Classroom], buildings: &[Building], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Classrooms")?;

    let columns = [
        ("Room", 12.0),
        ("Building", 25.0),
        ("Type", 16.0),
        ("Capacity", 10.0),
        ("Projector", 10.0),
        ("Available", 10.0),
    ];
    write_header(worksheet, &columns, rooms.len())?;

    for (idx, room) in rooms.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &room.room_number)?;

        let building_name = buildings
            .iter()
            .find(|b| b.id == room.building_id)
            .map(|b| b.name.as_str())
            .unwrap_or("");
        worksheet.write_string(row, 1, building_name)?;

        worksheet.write_string(row, 2, room.room_type.label())?;
        worksheet.write_number(row, 3, room.capacity)?;
        worksheet.write_string(row, 4, if room.has_projector { "Yes" } else { "No" })?;
        worksheet.write_string(row, 5, if room.is_available { "Yes" } else { "No" })?;
    }

    workbook.save(path)?;
    tracing::info!("Exported {} classrooms to {:?}", rooms.len(), path);
    Ok(())
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomType, StaffPosition};

    fn staff_member(id: i32, department_id: Option<i32>) -> Staff {
        Staff {
            id,
            staff_number: format!("STF-{id:03}"),
            first_name: "Amara".to_string(),
            last_name: "Okafor".to_string(),
            email: format!("staff{id}@uni.edu"),
            phone: None,
            department_id,
            position: StaffPosition::SeniorLecturer,
            is_active: true,
        }
    }

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("staff");
        assert!(name.starts_with("staff_"));
        assert!(name.ends_with(".xlsx"));
        // staff_YYYYmmdd_HHMMSS.xlsx
        assert_eq!(name.len(), "staff_".len() + 15 + ".xlsx".len());
    }

    #[test]
    fn test_export_staff_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.xlsx");
        let departments = vec![Department {
            id: 1,
            college_id: 1,
            name: "Computer Science".to_string(),
            code: "CSC".to_string(),
            head_name: None,
            is_active: true,
        }];

        export_staff_to_excel(&[staff_member(1, Some(1)), staff_member(2, None)], &departments, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_export_empty_classrooms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.xlsx");

        export_classrooms_to_excel(&[], &[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_classrooms_with_unknown_building() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.xlsx");
        let rooms = vec![Classroom {
            id: 4,
            building_id: 99,
            room_number: "LAB-2".to_string(),
            capacity: 40,
            room_type: RoomType::ComputerLab,
            has_projector: false,
            is_available: true,
        }];

        export_classrooms_to_excel(&rooms, &[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("staff.xlsx");

        let result = export_staff_to_excel(&[staff_member(1, None)], &[], &path);
        assert!(result.is_err());
    }
}
