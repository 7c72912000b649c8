//! # Backend Module
//!
//! Contains all non-UI logic for the attendance tracker.
//!
//! - **Domain**: attendance rules, calendar helpers, exports
//! - **Storage**: the CSV table and YAML configuration
//! - **IO**: mapping domain results to the `shared` DTOs
//!
//! All operations are synchronous; every call reads a fresh snapshot of the
//! stored table.

use anyhow::Result;
use log::info;
use std::path::Path;

pub mod domain;
pub mod io;
pub mod storage;

pub use storage::csv::CsvConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub connection: CsvConnection,
    pub calendar_service: domain::CalendarService,
    pub attendance_service: domain::AttendanceService<CsvConnection>,
    pub export_service: domain::ExportService,
}

impl Backend {
    /// Create a new backend instance over the given data directory
    pub fn new<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        info!("Setting up storage in {}", data_directory.as_ref().display());
        let connection = CsvConnection::new(data_directory)?;

        info!("Setting up domain services");
        let calendar_service = domain::CalendarService::new();
        let attendance_service = domain::AttendanceService::new(&connection, calendar_service.clone())?;
        let export_service = domain::ExportService::new();

        Ok(Backend {
            connection,
            calendar_service,
            attendance_service,
            export_service,
        })
    }
}
