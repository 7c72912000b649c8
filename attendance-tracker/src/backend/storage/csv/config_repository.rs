//! # Tracker Config Repository
//!
//! File-based configuration storage using a single YAML file
//! `attendance_config.yaml` next to the attendance table.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── attendance_config.yaml    ← This module manages this file
//! └── attendance.csv
//! ```
//!
//! ## YAML Format
//!
//! ```yaml
//! title: QET-1 Monthly Attendance Tracker
//! roster:
//!   - Balakumar
//!   - Benita Devanesam
//! monthly_quota: 8
//! no_selection_label: Select Employee
//! ```

use anyhow::Result;
use log::{debug, info};
use std::fs;

use super::connection::CsvConnection;
use crate::backend::domain::models::tracker_config::TrackerConfig;
use crate::backend::storage::traits::ConfigStorage;

/// YAML-backed tracker configuration repository
#[derive(Clone)]
pub struct ConfigRepository {
    connection: CsvConnection,
}

impl ConfigRepository {
    /// Create a new config repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Load config from file, creating the default if it doesn't exist
    fn load_or_create_config(&self) -> Result<TrackerConfig> {
        let config_path = self.connection.config_file_path();

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)?;
            let config: TrackerConfig = serde_yaml::from_str(&yaml_content)?;
            debug!("Loaded tracker config from {:?}", config_path);
            Ok(config)
        } else {
            let config = TrackerConfig::default();
            self.save_config(&config)?;
            info!("Created default tracker config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Save config to file
    fn save_config(&self, config: &TrackerConfig) -> Result<()> {
        let config_path = self.connection.config_file_path();
        let yaml_content = serde_yaml::to_string(config)?;

        self.connection.write_atomically(&config_path, yaml_content.as_bytes())?;

        debug!("Saved tracker config to {:?}", config_path);
        Ok(())
    }
}

impl ConfigStorage for ConfigRepository {
    fn get_config(&self) -> Result<TrackerConfig> {
        self.load_or_create_config()
    }

    fn update_config(&self, config: &TrackerConfig) -> Result<()> {
        self.save_config(config)?;
        info!("Updated tracker config ({} employees on roster)", config.roster.len());
        Ok(())
    }
}
