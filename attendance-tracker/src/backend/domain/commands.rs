//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed to the presentation layer. The IO layer maps the public DTOs
//! defined in the `shared` crate to and from these internal types.

pub mod attendance {
    use crate::backend::domain::models::attendance::AttendanceRecord;
    use crate::backend::domain::models::report::{AttendanceMatrixRow, SummaryRow};
    use chrono::NaiveDate;

    /// Input for replacing an employee's recorded dates.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateAttendanceCommand {
        /// None (or the roster's placeholder) means nobody is selected
        pub employee: Option<String>,
        /// Month the dates were picked from; defaults to the current month
        pub month_label: Option<String>,
        pub dates: Vec<String>,
    }

    /// What an update did.
    #[derive(Debug, Clone, PartialEq)]
    pub enum UpdateOutcome {
        /// The record now stored for the employee
        Updated(AttendanceRecord),
        /// No concrete employee was selected; nothing was written
        Skipped,
    }

    /// Query for a month's matrix and summary.
    #[derive(Debug, Clone, Default)]
    pub struct MonthViewQuery {
        /// e.g. "March 2025"; defaults to the current month
        pub month_label: Option<String>,
    }

    /// Everything derived for one month from a single table snapshot.
    #[derive(Debug, Clone)]
    pub struct MonthView {
        pub label: String,
        pub month: u32,
        pub year: i32,
        pub working_days: Vec<NaiveDate>,
        pub matrix: Vec<AttendanceMatrixRow>,
        pub summary: Vec<SummaryRow>,
    }
}

pub mod export {
    use std::path::PathBuf;

    /// Which table to write.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum ReportKind {
        /// Employee by working day presence matrix
        #[default]
        Matrix,
        /// Per-employee office days and percentages
        Summary,
    }

    impl ReportKind {
        pub fn default_file_name(&self) -> &'static str {
            match self {
                ReportKind::Matrix => "attendance_report.csv",
                ReportKind::Summary => "attendance_summary.csv",
            }
        }
    }

    /// Input for writing a report to disk.
    #[derive(Debug, Clone, Default)]
    pub struct ExportToPathCommand {
        pub kind: ReportKind,
        /// File or directory; defaults to the user's Documents folder
        pub custom_path: Option<String>,
    }

    /// Result of writing a report.
    #[derive(Debug, Clone)]
    pub struct ExportResult {
        pub file_path: PathBuf,
        pub row_count: usize,
    }
}
