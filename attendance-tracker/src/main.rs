use anyhow::Result;
use attendance_tracker::backend::{
    domain::{
        commands::{
            attendance::MonthViewQuery,
            export::{ExportToPathCommand, ReportKind},
        },
        models::attendance::NOT_APPLICABLE,
    },
    io::mappers::{AttendanceMapper, MonthViewMapper},
    Backend,
};
use chrono::{Datelike, Local};
use clap::Parser;
use log::{error, info};
use shared::UpdateAttendanceRequest;
use std::process::ExitCode;

mod cli;
mod render;

use cli::{Cli, Command, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let backend = Backend::new(&cli.data_dir)?;
    let attendance_service = &backend.attendance_service;
    let config = attendance_service.config();

    match cli.command {
        Command::Months { year } => {
            let year = year.unwrap_or_else(|| Local::now().year());
            let current = backend.calendar_service.current_month_label();
            for label in backend.calendar_service.month_options(year) {
                let marker = if label == current { "*" } else { " " };
                println!("{} {}", marker, label);
            }
        }

        Command::Roster => {
            for employee in config.employee_options() {
                println!("{}", employee);
            }
        }

        Command::Options { month, employee } => {
            let options = attendance_service.attendance_options(month.as_deref())?;
            let selected = match employee.as_deref() {
                Some(name) if config.is_employee_selected(Some(name)) => {
                    attendance_service.selected_dates(name.trim())?
                }
                _ => Vec::new(),
            };
            print!("{}", render::render_options(&options, &selected));
        }

        Command::Update { month, employee, mut dates, not_applicable } => {
            if not_applicable {
                dates.push(NOT_APPLICABLE.to_string());
            }

            let request = UpdateAttendanceRequest { employee, month, dates };
            let outcome = attendance_service.update_attendance(AttendanceMapper::to_command(request))?;
            let response = AttendanceMapper::to_update_response(outcome);
            println!("{}", response.success_message);
        }

        Command::View { month, format } => {
            let view = attendance_service.month_view(MonthViewQuery { month_label: month })?;
            let dto = MonthViewMapper::to_dto(view);
            match format {
                OutputFormat::Text => print!("{}", render::render_month(&config.title, &dto)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dto)?),
            }
        }

        Command::Export { month, output, summary } => {
            let view = attendance_service.month_view(MonthViewQuery { month_label: month })?;
            let kind = if summary { ReportKind::Summary } else { ReportKind::Matrix };
            let result = backend.export_service.export_to_path(
                &view,
                ExportToPathCommand {
                    kind,
                    custom_path: output,
                },
            )?;
            let response = AttendanceMapper::to_export_response(result);
            info!("Exported {} rows", response.row_count);
            println!("{}", response.message);
        }
    }

    Ok(())
}
