use anyhow::{anyhow, Result};
use csv::{ReaderBuilder, Writer};
use log::{debug, info, warn};
use std::fs::File;
use std::io::BufReader;

use super::connection::CsvConnection;
use crate::backend::domain::models::attendance::{AttendanceRecord, AttendanceTable, RecordedDates};
use crate::backend::storage::traits::AttendanceStorage;

const EMPLOYEE_COLUMN: &str = "Employee";
const DATES_COLUMN: &str = "Dates";

/// CSV-based attendance repository backed by a single `attendance.csv`
#[derive(Clone)]
pub struct AttendanceRepository {
    connection: CsvConnection,
}

impl AttendanceRepository {
    /// Create a new CSV attendance repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read all records from the CSV file
    fn read_records(&self) -> Result<Vec<AttendanceRecord>> {
        let file_path = self.connection.attendance_file_path();

        if !file_path.exists() {
            info!("No attendance table at {}, starting with an empty one", file_path.display());
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)?;
        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }

        let employee_index = headers
            .iter()
            .position(|h| h.trim() == EMPLOYEE_COLUMN)
            .ok_or_else(|| anyhow!("{} has no '{}' column", file_path.display(), EMPLOYEE_COLUMN))?;
        let dates_index = headers.iter().position(|h| h.trim() == DATES_COLUMN);
        if dates_index.is_none() {
            warn!("{} has no '{}' column, treating every record as empty", file_path.display(), DATES_COLUMN);
        }

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let row = result?;

            let employee = row.get(employee_index).unwrap_or("").trim();
            if employee.is_empty() {
                debug!("Skipping attendance row without an employee");
                continue;
            }

            // Absent or short cells mean "no recorded dates"
            let stored_dates = dates_index.and_then(|index| row.get(index)).unwrap_or("");
            records.push(AttendanceRecord::new(employee, RecordedDates::parse(stored_dates)));
        }

        Ok(records)
    }

    /// Write all records to the CSV file
    fn write_records(&self, records: &[AttendanceRecord]) -> Result<()> {
        let mut csv_writer = Writer::from_writer(Vec::new());

        csv_writer.write_record([EMPLOYEE_COLUMN, DATES_COLUMN])?;
        for record in records {
            csv_writer.write_record([record.employee.as_str(), record.dates.to_stored().as_str()])?;
        }
        csv_writer.flush()?;

        let bytes = csv_writer
            .into_inner()
            .map_err(|e| anyhow!("Failed to finish attendance CSV: {}", e))?;
        let file_path = self.connection.attendance_file_path();
        self.connection.write_atomically(&file_path, &bytes)?;

        debug!("Wrote {} attendance records to {}", records.len(), file_path.display());
        Ok(())
    }
}

impl AttendanceStorage for AttendanceRepository {
    fn load_table(&self) -> Result<AttendanceTable> {
        let records = self.read_records()?;
        Ok(AttendanceTable::from_records(records))
    }

    fn save_table(&self, table: &AttendanceTable) -> Result<()> {
        self.write_records(table.records())
    }
}
