//! attendance-tracker/src/backend/domain/models/tracker_config.rs

use serde::{Deserialize, Serialize};

/// Default number of office days per month that counts as full attendance
pub const DEFAULT_MONTHLY_QUOTA: u32 = 8;

const DEFAULT_ROSTER: &[&str] = &[
    "Balakumar",
    "Benita Devanesam",
    "Hari Abinaya M",
    "Hemanth",
    "Kishore",
    "Lavanya K",
    "Naga Arjun",
    "NandhaGopal E",
    "Nanthini E",
    "PavithraDevi",
    "Rajagopal B",
    "Rajalakshmi D",
    "Rajeswari M",
    "Sanjay Ram R",
    "Sendursuriyavel A",
    "Suganya R",
    "Vidya D",
    "Nanthini S",
    "Oviya",
    "Tharani",
];

/// Tracker configuration, persisted as YAML next to the attendance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Heading shown above reports
    pub title: String,
    /// Employees that appear in the summary, in display order
    pub roster: Vec<String>,
    /// Office days that count as 100% attendance
    pub monthly_quota: u32,
    /// Placeholder entry meaning "no employee selected"
    pub no_selection_label: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            title: "QET-1 Monthly Attendance Tracker".to_string(),
            roster: DEFAULT_ROSTER.iter().map(|name| name.to_string()).collect(),
            monthly_quota: DEFAULT_MONTHLY_QUOTA,
            no_selection_label: "Select Employee".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Whether a picker value refers to a concrete employee
    pub fn is_employee_selected(&self, selection: Option<&str>) -> bool {
        match selection.map(str::trim) {
            Some(name) => !name.is_empty() && name != self.no_selection_label,
            None => false,
        }
    }

    /// Roster entries as offered by a picker, sentinel first
    pub fn employee_options(&self) -> Vec<String> {
        std::iter::once(self.no_selection_label.clone())
            .chain(self.roster.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.roster.len(), 20);
        assert_eq!(config.monthly_quota, 8);
        assert_eq!(config.employee_options()[0], "Select Employee");
        assert_eq!(config.employee_options().len(), 21);
    }

    #[test]
    fn test_is_employee_selected() {
        let config = TrackerConfig::default();
        assert!(config.is_employee_selected(Some("Oviya")));
        assert!(!config.is_employee_selected(Some("Select Employee")));
        assert!(!config.is_employee_selected(Some("  ")));
        assert!(!config.is_employee_selected(None));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: TrackerConfig = serde_yaml::from_str("roster:\n  - Alice\n  - Bob\n").unwrap();
        assert_eq!(config.roster, vec!["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(config.monthly_quota, DEFAULT_MONTHLY_QUOTA);
        assert_eq!(config.no_selection_label, "Select Employee");
    }
}
