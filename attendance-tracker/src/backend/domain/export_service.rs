//! Export service domain logic for the attendance tracker.
//!
//! Turns a month view into CSV text (the presence matrix or the summary
//! table) and writes it to disk. The UI should only handle presentation
//! concerns.

use anyhow::{anyhow, Result};
use csv::Writer;
use log::{error, info};
use std::fs;
use std::path::PathBuf;

use crate::backend::domain::commands::attendance::MonthView;
use crate::backend::domain::commands::export::{ExportResult, ExportToPathCommand, ReportKind};

/// Export service that handles all export-related business logic
#[derive(Clone, Debug, Default)]
pub struct ExportService;

impl ExportService {
    /// Create a new ExportService instance
    pub fn new() -> Self {
        Self
    }

    /// Presence matrix as CSV: `Employee,<day1>,...,<dayN>` then one row per employee
    pub fn matrix_csv(&self, view: &MonthView) -> Result<String> {
        let mut csv_writer = Writer::from_writer(Vec::new());

        let mut header = vec!["Employee".to_string()];
        header.extend(view.working_days.iter().map(|day| day.format("%Y-%m-%d").to_string()));
        csv_writer.write_record(&header)?;

        for row in &view.matrix {
            let mut fields = vec![row.employee.as_str()];
            fields.extend(row.cells.iter().map(|cell| cell.presence.label()));
            csv_writer.write_record(&fields)?;
        }

        Self::finish(csv_writer)
    }

    /// Summary table as CSV: `Employee,Office Days,Attendance %`
    pub fn summary_csv(&self, view: &MonthView) -> Result<String> {
        let mut csv_writer = Writer::from_writer(Vec::new());
        csv_writer.write_record(["Employee", "Office Days", "Attendance %"])?;

        for row in &view.summary {
            csv_writer.write_record([
                row.employee.clone(),
                row.office_days.to_string(),
                row.formatted_percent(),
            ])?;
        }

        Self::finish(csv_writer)
    }

    fn finish(csv_writer: Writer<Vec<u8>>) -> Result<String> {
        let bytes = csv_writer
            .into_inner()
            .map_err(|e| anyhow!("Failed to finish CSV export: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Write a report to the given file or directory (or the default location)
    pub fn export_to_path(&self, view: &MonthView, command: ExportToPathCommand) -> Result<ExportResult> {
        info!("📁 EXPORT: Exporting {:?} for {} - custom_path: {:?}", command.kind, view.label, command.custom_path);

        let (content, row_count) = match command.kind {
            ReportKind::Matrix => (self.matrix_csv(view)?, view.matrix.len()),
            ReportKind::Summary => (self.summary_csv(view)?, view.summary.len()),
        };

        let file_path = self.resolve_export_path(command.custom_path.as_deref(), command.kind)?;

        // Ensure the directory exists
        if let Some(parent_dir) = file_path.parent() {
            if !parent_dir.as_os_str().is_empty() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    error!("❌ EXPORT: Failed to create export directory {:?}: {}", parent_dir, e);
                    anyhow!("Failed to create export directory {}: {}", parent_dir.display(), e)
                })?;
            }
        }

        fs::write(&file_path, content).map_err(|e| {
            error!("❌ EXPORT: Failed to write export file to {:?}: {}", file_path, e);
            anyhow!("Failed to write export file {}: {}", file_path.display(), e)
        })?;

        info!("✅ EXPORT: Wrote {} rows to {}", row_count, file_path.display());
        Ok(ExportResult { file_path, row_count })
    }

    /// A custom path naming a directory (existing, or without a file extension)
    /// gets the default file name appended. No custom path means the Documents folder.
    fn resolve_export_path(&self, custom_path: Option<&str>, kind: ReportKind) -> Result<PathBuf> {
        let file_name = kind.default_file_name();

        match custom_path {
            Some(custom_path) if !custom_path.trim().is_empty() => {
                let path = PathBuf::from(self.sanitize_path(custom_path));
                if path.is_dir() || path.extension().is_none() {
                    Ok(path.join(file_name))
                } else {
                    Ok(path)
                }
            }
            _ => {
                let export_dir = dirs::document_dir()
                    .or_else(dirs::home_dir)
                    .ok_or_else(|| anyhow!("Could not determine default export directory"))?;
                Ok(export_dir.join(file_name))
            }
        }
    }

    /// Basic path sanitization to handle common user input issues
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        // Remove surrounding quotes (single or double)
        if cleaned.len() >= 2
            && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
                || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
        {
            cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
        }

        // Handle escaped spaces (common on some systems)
        cleaned = cleaned.replace("\\ ", " ");

        // Remove any trailing slashes/backslashes
        while cleaned.len() > 1 && (cleaned.ends_with('/') || cleaned.ends_with('\\')) {
            cleaned.pop();
        }

        // Handle tilde expansion for home directory
        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}
