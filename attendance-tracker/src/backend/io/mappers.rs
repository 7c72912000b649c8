use crate::backend::domain::commands::{
    attendance::{MonthView, UpdateAttendanceCommand, UpdateOutcome},
    export::ExportResult,
};
use crate::backend::domain::models::report::{AttendanceMatrixRow, SummaryRow};
use shared::{
    AttendanceMonth, AttendanceRow, AttendanceSummaryRow, ExportToPathResponse,
    UpdateAttendanceRequest, UpdateAttendanceResponse,
};

pub struct MonthViewMapper;

impl MonthViewMapper {
    pub fn to_dto(view: MonthView) -> AttendanceMonth {
        AttendanceMonth {
            label: view.label,
            month: view.month,
            year: view.year,
            working_days: view
                .working_days
                .iter()
                .map(|day| day.format("%Y-%m-%d").to_string())
                .collect(),
            rows: view.matrix.into_iter().map(Self::row_to_dto).collect(),
            summary: view.summary.into_iter().map(Self::summary_to_dto).collect(),
        }
    }

    fn row_to_dto(row: AttendanceMatrixRow) -> AttendanceRow {
        AttendanceRow {
            cells: row.cells.iter().map(|cell| cell.presence.label().to_string()).collect(),
            employee: row.employee,
        }
    }

    fn summary_to_dto(row: SummaryRow) -> AttendanceSummaryRow {
        AttendanceSummaryRow {
            office_days: row.office_days.to_string(),
            attendance_percent: row.formatted_percent(),
            employee: row.employee,
        }
    }
}

pub struct AttendanceMapper;

impl AttendanceMapper {
    pub fn to_command(request: UpdateAttendanceRequest) -> UpdateAttendanceCommand {
        UpdateAttendanceCommand {
            employee: request.employee,
            month_label: request.month,
            dates: request.dates,
        }
    }

    pub fn to_update_response(outcome: UpdateOutcome) -> UpdateAttendanceResponse {
        match outcome {
            UpdateOutcome::Updated(record) => UpdateAttendanceResponse {
                updated: true,
                stored_dates: Some(record.dates.to_stored()),
                success_message: format!("Attendance updated successfully for {}", record.employee),
            },
            UpdateOutcome::Skipped => UpdateAttendanceResponse {
                updated: false,
                stored_dates: None,
                success_message: "No employee selected, nothing to update".to_string(),
            },
        }
    }

    pub fn to_export_response(result: ExportResult) -> ExportToPathResponse {
        let file_path = result.file_path.to_string_lossy().to_string();
        ExportToPathResponse {
            message: format!("File exported successfully to: {}", file_path),
            file_path,
            row_count: result.row_count,
        }
    }
}
