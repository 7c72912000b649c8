//! Attendance service domain logic for the attendance tracker.
//!
//! Each call works on a fresh snapshot of the stored table: load, compute,
//! return. Updates are read-modify-write with no locking, so concurrent
//! writers overwrite each other and the last one wins.

use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info, warn};
use thiserror::Error;

use crate::backend::domain::{
    attendance_calculator::AttendanceCalculator,
    calendar::CalendarService,
    commands::attendance::{MonthView, MonthViewQuery, UpdateAttendanceCommand, UpdateOutcome},
    models::{
        attendance::{AttendanceRecord, RecordedDates, NOT_APPLICABLE},
        tracker_config::TrackerConfig,
    },
};
use crate::backend::storage::traits::{AttendanceStorage, ConfigStorage, Connection};

#[derive(Debug, Error, PartialEq)]
pub enum AttendanceError {
    #[error("'{date}' is not a selectable date for {month}")]
    DateNotSelectable { date: String, month: String },
}

pub struct AttendanceService<C: Connection> {
    attendance_repository: C::AttendanceRepository,
    config: TrackerConfig,
    calculator: AttendanceCalculator,
    calendar_service: CalendarService,
}

impl<C: Connection> AttendanceService<C> {
    /// Create the service, loading (or creating) the tracker configuration
    pub fn new(connection: &C, calendar_service: CalendarService) -> Result<Self> {
        let config = connection.create_config_repository().get_config()?;
        info!(
            "📋 Loaded roster of {} employees (monthly quota {})",
            config.roster.len(),
            config.monthly_quota
        );

        Ok(Self {
            attendance_repository: connection.create_attendance_repository(),
            calculator: AttendanceCalculator::new(config.monthly_quota),
            config,
            calendar_service,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Resolve an optional month label to its canonical (label, month, year)
    fn resolve_month(&self, month_label: Option<&str>) -> Result<(String, u32, i32)> {
        let label = match month_label {
            Some(label) => label.to_string(),
            None => self.calendar_service.current_month_label(),
        };
        let (month, year) = self.calendar_service.parse_month_label(&label)?;
        let label = self.calendar_service.month_label(month, year)?;
        Ok((label, month, year))
    }

    /// Working days of the labelled month
    pub fn working_days(&self, month_label: Option<&str>) -> Result<Vec<NaiveDate>> {
        let (_, month, year) = self.resolve_month(month_label)?;
        Ok(self.calculator.compute_working_days(month, year))
    }

    /// Values an employee can pick from: the month's working days, then "N/A"
    pub fn attendance_options(&self, month_label: Option<&str>) -> Result<Vec<String>> {
        let mut options: Vec<String> = self
            .working_days(month_label)?
            .into_iter()
            .map(|day| self.calendar_service.day_label(day))
            .collect();
        options.push(NOT_APPLICABLE.to_string());
        Ok(options)
    }

    /// The employee's stored selection, used to pre-fill a picker
    pub fn selected_dates(&self, employee: &str) -> Result<Vec<String>> {
        let selection = self
            .attendance_repository
            .get_record(employee)?
            .map(|record| record.dates.as_selection())
            .unwrap_or_default();
        Ok(selection)
    }

    /// Replace an employee's recorded dates.
    ///
    /// Without a concrete employee nothing is written. Every selected value
    /// must be one of the month's attendance options. Any "N/A" in the
    /// selection replaces the whole selection.
    pub fn update_attendance(&self, command: UpdateAttendanceCommand) -> Result<UpdateOutcome> {
        if !self.config.is_employee_selected(command.employee.as_deref()) {
            debug!("No employee selected, skipping attendance update");
            return Ok(UpdateOutcome::Skipped);
        }

        let (label, _, _) = self.resolve_month(command.month_label.as_deref())?;
        let options = self.attendance_options(Some(label.as_str()))?;
        let unknown = command
            .dates
            .iter()
            .map(|date| date.trim())
            .find(|date| !date.is_empty() && !options.iter().any(|option| option.as_str() == *date));
        if let Some(date) = unknown {
            return Err(AttendanceError::DateNotSelectable {
                date: date.to_string(),
                month: label,
            }
            .into());
        }

        let employee = command.employee.unwrap_or_default().trim().to_string();

        if !self.config.roster.contains(&employee) {
            warn!("'{}' is not on the roster, storing the record anyway", employee);
        }

        let dates = RecordedDates::from_selection(&command.dates);
        let record = AttendanceRecord::new(employee, dates);
        self.attendance_repository.upsert_record(&record)?;

        info!(
            "✅ Attendance updated for {}: {}",
            record.employee,
            record.dates.to_stored()
        );
        Ok(UpdateOutcome::Updated(record))
    }

    /// Matrix and summary for a month, from a fresh table snapshot
    pub fn month_view(&self, query: MonthViewQuery) -> Result<MonthView> {
        let (label, month, year) = self.resolve_month(query.month_label.as_deref())?;
        info!("🗓️ Building attendance view for {}", label);

        let table = self.attendance_repository.load_table()?;
        let working_days = self.calculator.compute_working_days(month, year);

        let matrix = self.calculator.build_matrix(&table, &working_days);
        let summary = self
            .calculator
            .build_summary(&self.config.roster, &table, working_days.len());

        debug!(
            "{} working days, {} stored records, {} summary rows",
            working_days.len(),
            table.len(),
            summary.len()
        );

        Ok(MonthView {
            label,
            month,
            year,
            working_days,
            matrix,
            summary,
        })
    }
}
