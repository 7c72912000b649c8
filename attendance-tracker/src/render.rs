//! Plain-text rendering of the month view for the terminal

use shared::{AttendanceMonth, AttendanceSummaryRow};

/// Render the matrix ("Full Attendance Record") and the summary table
pub fn render_month(title: &str, month: &AttendanceMonth) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} - {}\n\n", title, month.label));
    out.push_str("Full Attendance Record\n");
    out.push_str(&render_matrix(month));
    out.push('\n');
    out.push_str("Attendance Summary\n");
    out.push_str(&render_summary(&month.summary));
    out
}

/// Matrix with one column per working day, headed by the day of the month
pub fn render_matrix(month: &AttendanceMonth) -> String {
    if month.rows.is_empty() {
        return "(no attendance recorded)\n".to_string();
    }

    let name_width = month
        .rows
        .iter()
        .map(|row| row.employee.chars().count())
        .max()
        .unwrap_or(0)
        .max("Employee".len());

    let mut out = format!("{:<width$}", "Employee", width = name_width);
    for day in &month.working_days {
        // "2025-03-07" -> "07"
        let day_of_month = day.rsplit('-').next().unwrap_or(day);
        out.push_str(&format!(" {:>6}", day_of_month));
    }
    out.push('\n');

    for row in &month.rows {
        out.push_str(&format!("{:<width$}", row.employee, width = name_width));
        for cell in &row.cells {
            out.push_str(&format!(" {:>6}", cell));
        }
        out.push('\n');
    }
    out
}

pub fn render_summary(rows: &[AttendanceSummaryRow]) -> String {
    let name_width = rows
        .iter()
        .map(|row| row.employee.chars().count())
        .max()
        .unwrap_or(0)
        .max("Employee".len());

    let mut out = format!("{:<width$}  {:>11}  {:>12}\n", "Employee", "Office Days", "Attendance %", width = name_width);
    for row in rows {
        out.push_str(&format!(
            "{:<width$}  {:>11}  {:>12}\n",
            row.employee,
            row.office_days,
            row.attendance_percent,
            width = name_width
        ));
    }
    out
}

/// One option per line, "[x]" marking the ones already stored
pub fn render_options(options: &[String], selected: &[String]) -> String {
    options
        .iter()
        .map(|option| {
            let mark = if selected.contains(option) { "x" } else { " " };
            format!("[{}] {}\n", mark, option)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AttendanceRow;

    fn month() -> AttendanceMonth {
        AttendanceMonth {
            label: "March 2025".to_string(),
            month: 3,
            year: 2025,
            working_days: vec!["2025-03-03".to_string(), "2025-03-04".to_string()],
            rows: vec![AttendanceRow {
                employee: "Oviya".to_string(),
                cells: vec!["Office".to_string(), "-".to_string()],
            }],
            summary: vec![AttendanceSummaryRow {
                employee: "Oviya".to_string(),
                office_days: "1".to_string(),
                attendance_percent: "12.50%".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_matrix() {
        let rendered = render_matrix(&month());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Employee     03     04");
        assert_eq!(lines[1], "Oviya    Office      -");
    }

    #[test]
    fn test_render_matrix_without_rows() {
        let mut empty = month();
        empty.rows.clear();
        assert_eq!(render_matrix(&empty), "(no attendance recorded)\n");
    }

    #[test]
    fn test_render_month_contains_both_tables() {
        let rendered = render_month("QET-1 Monthly Attendance Tracker", &month());

        assert!(rendered.starts_with("QET-1 Monthly Attendance Tracker - March 2025\n"));
        assert!(rendered.contains("Full Attendance Record"));
        assert!(rendered.contains("12.50%"));
    }

    #[test]
    fn test_render_options_marks_selected() {
        let options = vec!["2025-03-03".to_string(), "2025-03-04".to_string(), "N/A".to_string()];
        let selected = vec!["2025-03-04".to_string()];

        assert_eq!(
            render_options(&options, &selected),
            "[ ] 2025-03-03\n[x] 2025-03-04\n[ ] N/A\n"
        );
    }
}
