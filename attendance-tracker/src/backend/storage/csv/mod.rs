//! # CSV Storage Module
//!
//! File-based storage for the attendance tracker. Everything lives in one
//! data directory:
//!
//! - `attendance.csv`: the attendance table
//! - `attendance_config.yaml`: roster and tracker settings
//!
//! ## File Format
//!
//! ```csv
//! Employee,Dates
//! Oviya,"2025-03-03, 2025-03-04"
//! Tharani,N/A
//! Kishore,
//! ```
//!
//! `Dates` holds a comma-space joined list of `YYYY-MM-DD` labels, the
//! literal `N/A`, or nothing. Every write rewrites the whole file through a
//! temp file and a rename.

pub mod connection;
pub mod attendance_repository;
pub mod config_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use attendance_repository::AttendanceRepository;
pub use config_repository::ConfigRepository;
