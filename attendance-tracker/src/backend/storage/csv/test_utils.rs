//! Test utilities module for automatic cleanup and consistent test infrastructure
//!
//! This module provides RAII-based cleanup that guarantees test data is removed
//! even if tests panic or fail.

use tempfile::TempDir;
use anyhow::Result;
use super::connection::CsvConnection;
use super::attendance_repository::AttendanceRepository;
use super::config_repository::ConfigRepository;
use crate::backend::domain::models::attendance::{AttendanceRecord, RecordedDates};
use crate::backend::domain::models::tracker_config::TrackerConfig;
use crate::backend::storage::traits::{AttendanceStorage, ConfigStorage};

/// Test environment that provides a temporary directory and connection
/// that will be automatically cleaned up when the environment is dropped,
/// even if tests panic or fail.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir,  // Keep alive to prevent cleanup
}

/// Test helper that provides repository instances for a test environment
pub struct TestHelper {
    pub env: TestEnvironment,
    pub attendance_repo: AttendanceRepository,
    pub config_repo: ConfigRepository,
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

impl TestHelper {
    /// Create a new test helper with a fresh environment
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let attendance_repo = AttendanceRepository::new(env.connection.clone());
        let config_repo = ConfigRepository::new(env.connection.clone());

        Ok(Self {
            env,
            attendance_repo,
            config_repo,
        })
    }

    /// Store a small roster so tests don't depend on the default one
    pub fn with_roster(&self, roster: &[&str]) -> Result<TrackerConfig> {
        let config = TrackerConfig {
            roster: roster.iter().map(|name| name.to_string()).collect(),
            ..TrackerConfig::default()
        };
        self.config_repo.update_config(&config)?;
        Ok(config)
    }

    /// Store a record from its on-disk representation
    pub fn store_record(&self, employee: &str, stored_dates: &str) -> Result<AttendanceRecord> {
        let record = AttendanceRecord::new(employee, RecordedDates::parse(stored_dates));
        self.attendance_repo.upsert_record(&record)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }

    #[test]
    fn test_repository_helper() -> Result<()> {
        let helper = TestHelper::new()?;

        let config = helper.with_roster(&["Alice", "Bob"])?;
        assert_eq!(helper.config_repo.get_config()?, config);

        helper.store_record("Alice", "2025-03-03")?;
        assert!(helper.attendance_repo.get_record("Alice")?.is_some());

        Ok(())
    }
}
