//! Calendar domain logic for the attendance tracker.
//!
//! This module contains the month selection rules: month labels such as
//! "March 2025", the twelve options offered for a year, and the date
//! arithmetic the rest of the domain relies on. The UI should only handle
//! presentation concerns.

use chrono::{Datelike, Local, NaiveDate};
use log::debug;
use thiserror::Error;

/// Format used for month labels, e.g. "March 2025"
const MONTH_LABEL_FORMAT: &str = "%B %Y";

#[derive(Debug, Error, PartialEq)]
pub enum CalendarError {
    #[error("Invalid month label '{0}', expected something like 'March 2025'")]
    InvalidMonthLabel(String),
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),
}

/// Calendar service that handles month selection and date arithmetic
#[derive(Clone, Debug, Default)]
pub struct CalendarService;

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self
    }

    /// Label for a month, e.g. "March 2025"
    pub fn month_label(&self, month: u32, year: i32) -> Result<String, CalendarError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidMonth(month))?;
        Ok(first.format(MONTH_LABEL_FORMAT).to_string())
    }

    /// The twelve month labels of a year, January first
    pub fn month_options(&self, year: i32) -> Vec<String> {
        (1..=12)
            .filter_map(|month| self.month_label(month, year).ok())
            .collect()
    }

    /// Label of the month containing today's local date
    pub fn current_month_label(&self) -> String {
        let today = Local::now().date_naive();
        today.format(MONTH_LABEL_FORMAT).to_string()
    }

    /// Parse a month label back into (month, year).
    ///
    /// Only the canonical "%B %Y" form is accepted, ignoring case, so
    /// abbreviations and short years such as "March 25" are rejected.
    pub fn parse_month_label(&self, label: &str) -> Result<(u32, i32), CalendarError> {
        let trimmed = label.trim();
        let invalid = || CalendarError::InvalidMonthLabel(label.to_string());

        // chrono needs a day to build a date, so pin the label to the 1st
        let with_day = format!("1 {}", trimmed);
        let date = NaiveDate::parse_from_str(&with_day, "%d %B %Y").map_err(|_| invalid())?;

        let canonical = date.format(MONTH_LABEL_FORMAT).to_string();
        if !canonical.eq_ignore_ascii_case(trimmed) {
            return Err(invalid());
        }

        debug!("Parsed month label '{}' as {}/{}", label, date.month(), date.year());
        Ok((date.month(), date.year()))
    }

    /// Format a date the way working days are labelled everywhere (YYYY-MM-DD)
    pub fn day_label(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}
