//! attendance-tracker/src/backend/domain/models/report.rs

use chrono::NaiveDate;
use std::fmt;

/// Employee label used for the synthesized company-wide summary row
pub const OVERALL_ROW_LABEL: &str = "Overall Attendance %";

/// Whether an employee was in the office on a working day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Office,
    Absent,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Office => "Office",
            Presence::Absent => "-",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixCell {
    pub day: NaiveDate,
    pub presence: Presence,
}

/// Derived per-employee presence row. Recomputed on every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceMatrixRow {
    pub employee: String,
    pub cells: Vec<MatrixCell>,
}

impl AttendanceMatrixRow {
    pub fn office_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.presence == Presence::Office)
            .count()
    }
}

/// Office day count of a summary row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfficeDays {
    Count(usize),
    /// Only used by the overall row
    NotApplicable,
}

impl fmt::Display for OfficeDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfficeDays::Count(count) => write!(f, "{}", count),
            OfficeDays::NotApplicable => f.write_str(super::attendance::NOT_APPLICABLE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub employee: String,
    pub office_days: OfficeDays,
    /// Always within [0, 100]
    pub attendance_percent: f64,
    /// False when the employee has no stored record at all
    pub has_record: bool,
}

impl SummaryRow {
    pub fn is_aggregate(&self) -> bool {
        self.office_days == OfficeDays::NotApplicable
    }

    pub fn formatted_percent(&self) -> String {
        format!("{:.2}%", self.attendance_percent)
    }
}
