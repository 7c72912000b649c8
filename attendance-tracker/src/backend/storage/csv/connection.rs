use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::attendance_repository::AttendanceRepository;
use super::config_repository::ConfigRepository;
use crate::backend::storage::traits::Connection;

/// File holding the attendance table
pub const ATTENDANCE_FILE_NAME: &str = "attendance.csv";

/// File holding the roster and tracker settings
pub const CONFIG_FILE_NAME: &str = "attendance_config.yaml";

/// CsvConnection manages the data directory that holds the tracker files
#[derive(Clone, Debug)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the path of the attendance table
    pub fn attendance_file_path(&self) -> PathBuf {
        self.base_directory.join(ATTENDANCE_FILE_NAME)
    }

    /// Get the path of the configuration file
    pub fn config_file_path(&self) -> PathBuf {
        self.base_directory.join(CONFIG_FILE_NAME)
    }

    /// Write a file by writing a sibling temp file and renaming it over the target
    pub fn write_atomically(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
            info!("Created data directory: {}", self.base_directory.display());
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

impl Connection for CsvConnection {
    type AttendanceRepository = AttendanceRepository;
    type ConfigRepository = ConfigRepository;

    fn create_attendance_repository(&self) -> Self::AttendanceRepository {
        AttendanceRepository::new(self.clone())
    }

    fn create_config_repository(&self) -> Self::ConfigRepository {
        ConfigRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data").join("attendance");

        let connection = CsvConnection::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(connection.attendance_file_path(), nested.join("attendance.csv"));
        assert_eq!(connection.config_file_path(), nested.join("attendance_config.yaml"));
    }

    #[test]
    fn test_write_atomically_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let path = connection.attendance_file_path();

        connection.write_atomically(&path, b"Employee,Dates\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Employee,Dates\n");
        assert!(!path.with_extension("tmp").exists());
    }
}
