//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use crate::backend::domain::models::attendance::{AttendanceRecord, AttendanceTable};
use crate::backend::domain::models::tracker_config::TrackerConfig;

/// Trait defining the interface for attendance table storage
///
/// The table is small, so reads and writes always cover the whole table.
pub trait AttendanceStorage: Send + Sync {
    /// Load the current table. A missing table is an empty table, not an error.
    fn load_table(&self) -> Result<AttendanceTable>;

    /// Replace the stored table
    fn save_table(&self, table: &AttendanceTable) -> Result<()>;

    /// Read-modify-write a single record. The last writer wins.
    fn upsert_record(&self, record: &AttendanceRecord) -> Result<()> {
        let mut table = self.load_table()?;
        table.upsert(record.clone());
        self.save_table(&table)
    }

    /// Look up a single employee's record
    fn get_record(&self, employee: &str) -> Result<Option<AttendanceRecord>> {
        Ok(self.load_table()?.find(employee).cloned())
    }
}

/// Trait defining the interface for tracker configuration storage
pub trait ConfigStorage: Send + Sync {
    /// Get the configuration, creating the default one if none is stored
    fn get_config(&self) -> Result<TrackerConfig>;

    /// Replace the stored configuration
    fn update_config(&self, config: &TrackerConfig) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories, so the domain layer can work
/// with any storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    /// The type of AttendanceStorage this connection creates
    type AttendanceRepository: AttendanceStorage;

    /// The type of ConfigStorage this connection creates
    type ConfigRepository: ConfigStorage;

    /// Create a new attendance repository for this connection
    fn create_attendance_repository(&self) -> Self::AttendanceRepository;

    /// Create a new configuration repository for this connection
    fn create_config_repository(&self) -> Self::ConfigRepository;
}
