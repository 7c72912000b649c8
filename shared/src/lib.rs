use serde::{Deserialize, Serialize};

/// Label stored in place of a date list when an employee is exempt
pub const NOT_APPLICABLE: &str = "N/A";

/// One employee's row of the attendance matrix for a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub employee: String,
    /// One cell per working day, in the same order as `AttendanceMonth::working_days`.
    /// Either "Office" or "-".
    pub cells: Vec<String>,
}

/// One line of the attendance summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummaryRow {
    pub employee: String,
    /// Number of recorded entries, or "N/A" for the overall row
    pub office_days: String,
    /// Percentage formatted with two decimals and a trailing '%'
    pub attendance_percent: String,
}

/// Everything the presentation layer needs to render a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceMonth {
    /// Human-readable month label, e.g. "March 2025"
    pub label: String,
    pub month: u32,
    pub year: i32,
    /// Working day labels (YYYY-MM-DD), ascending
    pub working_days: Vec<String>,
    pub rows: Vec<AttendanceRow>,
    pub summary: Vec<AttendanceSummaryRow>,
}

/// Request to replace an employee's selected attendance dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAttendanceRequest {
    /// Employee name, or None when nobody is selected
    pub employee: Option<String>,
    /// Month label the dates were picked from, e.g. "March 2025"
    pub month: Option<String>,
    /// Selected working day labels, optionally including "N/A"
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAttendanceResponse {
    /// Whether anything was written
    pub updated: bool,
    /// Value now stored for the employee (comma-separated dates or "N/A")
    pub stored_dates: Option<String>,
    pub success_message: String,
}

/// Result of writing a report to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathResponse {
    pub file_path: String,
    pub row_count: usize,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_month_serializes_to_json() {
        let month = AttendanceMonth {
            label: "March 2025".to_string(),
            month: 3,
            year: 2025,
            working_days: vec!["2025-03-03".to_string()],
            rows: vec![AttendanceRow {
                employee: "Oviya".to_string(),
                cells: vec!["Office".to_string()],
            }],
            summary: vec![AttendanceSummaryRow {
                employee: "Overall Attendance %".to_string(),
                office_days: NOT_APPLICABLE.to_string(),
                attendance_percent: "12.50%".to_string(),
            }],
        };

        let json = serde_json::to_string(&month).unwrap();
        assert!(json.contains("\"label\":\"March 2025\""));
        assert!(json.contains("\"office_days\":\"N/A\""));

        let parsed: AttendanceMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, month);
    }
}
