//! Attendance calculations for the tracker.
//!
//! Everything here is pure: the functions take a snapshot of the stored
//! attendance table and derive the working days of a month, the presence
//! matrix and the summary percentages. Nothing is cached between calls.

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};

use crate::backend::domain::models::{
    attendance::{AttendanceRecord, AttendanceTable},
    report::{AttendanceMatrixRow, MatrixCell, OfficeDays, Presence, SummaryRow, OVERALL_ROW_LABEL},
    tracker_config::DEFAULT_MONTHLY_QUOTA,
};

#[derive(Clone, Debug)]
pub struct AttendanceCalculator {
    /// Office days that count as 100%. Never zero.
    monthly_quota: u32,
}

impl AttendanceCalculator {
    pub fn new(monthly_quota: u32) -> Self {
        if monthly_quota == 0 {
            warn!("Monthly quota of 0 is not usable, falling back to 1");
        }
        Self {
            monthly_quota: monthly_quota.max(1),
        }
    }

    pub fn monthly_quota(&self) -> u32 {
        self.monthly_quota
    }

    /// Monday to Friday dates of the month, ascending.
    ///
    /// `month` must be in 1..=12. An invalid month or year yields no days.
    pub fn compute_working_days(&self, month: u32, year: i32) -> Vec<NaiveDate> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            warn!("No working days for invalid month {}/{}", month, year);
            return Vec::new();
        };

        first
            .iter_days()
            .take_while(|day| day.month() == month)
            .filter(|day| day.weekday().num_days_from_monday() < 5)
            .collect()
    }

    /// Mark each working day as Office when its label is one of the recorded dates.
    pub fn reconcile(
        &self,
        employee: &str,
        record: Option<&AttendanceRecord>,
        working_days: &[NaiveDate],
    ) -> AttendanceMatrixRow {
        let cells = working_days
            .iter()
            .map(|day| {
                let label = day.format("%Y-%m-%d").to_string();
                let presence = match record {
                    Some(record) if record.dates.contains(&label) => Presence::Office,
                    _ => Presence::Absent,
                };
                MatrixCell { day: *day, presence }
            })
            .collect();

        AttendanceMatrixRow {
            employee: employee.to_string(),
            cells,
        }
    }

    /// Summary for one employee.
    ///
    /// The percentage is measured against the monthly quota, not against
    /// `total_working_days`. An N/A record is always 100%.
    pub fn compute_summary(
        &self,
        employee: &str,
        record: Option<&AttendanceRecord>,
        total_working_days: usize,
    ) -> SummaryRow {
        let Some(record) = record else {
            return SummaryRow {
                employee: employee.to_string(),
                office_days: OfficeDays::Count(0),
                attendance_percent: 0.0,
                has_record: false,
            };
        };

        let office_days = record.dates.entry_count();
        let attendance_percent = if record.dates.is_not_applicable() {
            100.0
        } else {
            (office_days as f64 / self.monthly_quota as f64 * 100.0).min(100.0)
        };

        debug!(
            "{}: {} entries, {:.2}% ({} working days this month)",
            employee, office_days, attendance_percent, total_working_days
        );

        SummaryRow {
            employee: employee.to_string(),
            office_days: OfficeDays::Count(office_days),
            attendance_percent,
            has_record: true,
        }
    }

    /// Mean percentage over employees that have a record. 0.0 when there are none.
    pub fn compute_company_average(&self, summary_rows: &[SummaryRow]) -> f64 {
        let eligible: Vec<f64> = summary_rows
            .iter()
            .filter(|row| row.has_record && !row.is_aggregate())
            .map(|row| row.attendance_percent)
            .collect();

        if eligible.is_empty() {
            return 0.0;
        }
        eligible.iter().sum::<f64>() / eligible.len() as f64
    }

    /// One matrix row per stored record, in table order
    pub fn build_matrix(&self, table: &AttendanceTable, working_days: &[NaiveDate]) -> Vec<AttendanceMatrixRow> {
        table
            .records()
            .iter()
            .map(|record| self.reconcile(&record.employee, Some(record), working_days))
            .collect()
    }

    /// One summary row per roster employee, followed by the overall row
    pub fn build_summary(
        &self,
        roster: &[String],
        table: &AttendanceTable,
        total_working_days: usize,
    ) -> Vec<SummaryRow> {
        let mut rows: Vec<SummaryRow> = roster
            .iter()
            .map(|employee| self.compute_summary(employee, table.find(employee), total_working_days))
            .collect();

        let company_average = self.compute_company_average(&rows);
        rows.push(SummaryRow {
            employee: OVERALL_ROW_LABEL.to_string(),
            office_days: OfficeDays::NotApplicable,
            attendance_percent: company_average,
            has_record: false,
        });
        rows
    }
}

impl Default for AttendanceCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_MONTHLY_QUOTA)
    }
}
