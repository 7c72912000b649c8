//! attendance-tracker/src/backend/domain/models/attendance.rs

use serde::{Deserialize, Serialize};

/// Sentinel meaning the employee is exempt from attendance for the period
pub const NOT_APPLICABLE: &str = shared::NOT_APPLICABLE;

/// Separator used when a date list is stored as a single string
pub const DATE_SEPARATOR: &str = ", ";

/// The dates an employee was recorded as attending, or the N/A exemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordedDates {
    /// Date labels in selection order, without duplicates
    Dates(Vec<String>),
    /// Exempt from tracking; replaces any other selection
    NotApplicable,
}

impl RecordedDates {
    /// Build from a user selection. Any "N/A" entry overrides the whole selection.
    pub fn from_selection<I, S>(selection: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dates: Vec<String> = Vec::new();
        for entry in selection {
            let entry = entry.as_ref().trim();
            if entry == NOT_APPLICABLE {
                return RecordedDates::NotApplicable;
            }
            if !entry.is_empty() && !dates.iter().any(|d| d == entry) {
                dates.push(entry.to_string());
            }
        }
        RecordedDates::Dates(dates)
    }

    /// Parse the stored column value (comma-space joined list, "N/A", or empty)
    pub fn parse(stored: &str) -> Self {
        if stored.trim().is_empty() {
            return RecordedDates::Dates(Vec::new());
        }
        Self::from_selection(stored.split(DATE_SEPARATOR))
    }

    /// Render for storage
    pub fn to_stored(&self) -> String {
        match self {
            RecordedDates::Dates(dates) => dates.join(DATE_SEPARATOR),
            RecordedDates::NotApplicable => NOT_APPLICABLE.to_string(),
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, RecordedDates::NotApplicable)
    }

    /// Exact-match lookup of a date label
    pub fn contains(&self, label: &str) -> bool {
        match self {
            RecordedDates::Dates(dates) => dates.iter().any(|d| d == label),
            RecordedDates::NotApplicable => false,
        }
    }

    /// Number of stored entries. The N/A sentinel counts as one entry.
    pub fn entry_count(&self) -> usize {
        match self {
            RecordedDates::Dates(dates) => dates.len(),
            RecordedDates::NotApplicable => 1,
        }
    }

    /// The entries as they would be pre-selected in a picker
    pub fn as_selection(&self) -> Vec<String> {
        match self {
            RecordedDates::Dates(dates) => dates.clone(),
            RecordedDates::NotApplicable => vec![NOT_APPLICABLE.to_string()],
        }
    }
}

impl Default for RecordedDates {
    fn default() -> Self {
        RecordedDates::Dates(Vec::new())
    }
}

/// Stored association between an employee and their recorded dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee: String,
    pub dates: RecordedDates,
}

impl AttendanceRecord {
    pub fn new(employee: impl Into<String>, dates: RecordedDates) -> Self {
        Self {
            employee: employee.into(),
            dates,
        }
    }
}

/// Snapshot of the persisted attendance table, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceTable {
    records: Vec<AttendanceRecord>,
}

impl AttendanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored rows. A repeated employee keeps its first position
    /// and takes the later row's dates.
    pub fn from_records(records: Vec<AttendanceRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.upsert(record);
        }
        table
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, employee: &str) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.employee == employee)
    }

    /// Insert or overwrite. New employees are appended at the end.
    pub fn upsert(&mut self, record: AttendanceRecord) {
        match self.records.iter_mut().find(|r| r.employee == record.employee) {
            Some(existing) => existing.dates = record.dates,
            None => self.records.push(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selection_dedupes_and_keeps_order() {
        let dates = RecordedDates::from_selection(["2025-03-04", "2025-03-03", "2025-03-04"]);
        assert_eq!(
            dates,
            RecordedDates::Dates(vec!["2025-03-04".to_string(), "2025-03-03".to_string()])
        );
    }

    #[test]
    fn test_not_applicable_overrides_selection() {
        let dates = RecordedDates::from_selection(["2025-03-03", "N/A", "2025-03-05"]);
        assert_eq!(dates, RecordedDates::NotApplicable);
        assert_eq!(dates.to_stored(), "N/A");
        assert_eq!(dates.as_selection(), vec!["N/A".to_string()]);
    }

    #[test]
    fn test_parse_stored_values() {
        assert_eq!(RecordedDates::parse(""), RecordedDates::Dates(vec![]));
        assert_eq!(RecordedDates::parse("N/A"), RecordedDates::NotApplicable);

        let parsed = RecordedDates::parse("2025-03-03, 2025-03-04");
        assert_eq!(parsed.entry_count(), 2);
        assert!(parsed.contains("2025-03-03"));
        assert!(!parsed.contains("2025-03-05"));
        assert_eq!(parsed.to_stored(), "2025-03-03, 2025-03-04");
    }

    #[test]
    fn test_not_applicable_counts_as_one_entry() {
        assert_eq!(RecordedDates::NotApplicable.entry_count(), 1);
        assert!(!RecordedDates::NotApplicable.contains("N/A"));
    }

    #[test]
    fn test_table_upsert_overwrites_in_place() {
        let mut table = AttendanceTable::new();
        table.upsert(AttendanceRecord::new("Oviya", RecordedDates::parse("2025-03-03")));
        table.upsert(AttendanceRecord::new("Tharani", RecordedDates::NotApplicable));
        table.upsert(AttendanceRecord::new("Oviya", RecordedDates::parse("2025-03-04")));

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].employee, "Oviya");
        assert_eq!(table.find("Oviya").unwrap().dates.to_stored(), "2025-03-04");
        assert!(table.find("Hemanth").is_none());
    }

    #[test]
    fn test_from_records_collapses_duplicates() {
        let table = AttendanceTable::from_records(vec![
            AttendanceRecord::new("Kishore", RecordedDates::parse("2025-03-03")),
            AttendanceRecord::new("Kishore", RecordedDates::parse("2025-03-10")),
        ]);
        assert_eq!(table.len(), 1);
        assert!(table.find("Kishore").unwrap().dates.contains("2025-03-10"));
    }
}
