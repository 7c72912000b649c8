//! CLI argument parsing for the attendance tracker

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the month view
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    Text,
    /// JSON for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "attendance-tracker")]
#[command(version)]
#[command(about = "Monthly office attendance tracker", long_about = None)]
pub struct Cli {
    /// Directory holding attendance.csv and attendance_config.yaml
    #[arg(long, env = "ATTENDANCE_DATA_DIR", default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Log debug output (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the twelve selectable months of a year
    Months {
        /// Defaults to the current year
        #[arg(long)]
        year: Option<i32>,
    },

    /// List the employee picker entries: the no-selection placeholder, then the roster
    Roster,

    /// Show the dates an employee can pick for a month, marking stored ones
    Options {
        /// Month label such as "March 2025" (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        #[arg(short, long)]
        employee: Option<String>,
    },

    /// Replace an employee's attendance dates
    Update {
        /// Month the dates are picked from (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        #[arg(short, long)]
        employee: Option<String>,

        /// Working day in YYYY-MM-DD form; repeat for several days
        #[arg(short, long = "date", value_name = "DATE")]
        dates: Vec<String>,

        /// Mark the employee as exempt (N/A); overrides any --date
        #[arg(long = "not-applicable")]
        not_applicable: bool,
    },

    /// Show the attendance matrix and summary for a month
    View {
        #[arg(short, long)]
        month: Option<String>,

        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write the attendance report as CSV
    Export {
        #[arg(short, long)]
        month: Option<String>,

        /// File or directory to write to (defaults to the Documents folder)
        #[arg(short, long)]
        output: Option<String>,

        /// Export the summary table instead of the presence matrix
        #[arg(long)]
        summary: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update() {
        let cli = Cli::parse_from([
            "attendance-tracker",
            "--data-dir",
            "/tmp/attendance",
            "update",
            "--month",
            "March 2025",
            "--employee",
            "Oviya",
            "--date",
            "2025-03-03",
            "-d",
            "2025-03-04",
        ]);

        assert_eq!(cli.data_dir, PathBuf::from("/tmp/attendance"));
        match cli.command {
            Command::Update { month, employee, dates, not_applicable } => {
                assert_eq!(month.as_deref(), Some("March 2025"));
                assert_eq!(employee.as_deref(), Some("Oviya"));
                assert_eq!(dates, vec!["2025-03-03".to_string(), "2025-03-04".to_string()]);
                assert!(!not_applicable);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_view_json() {
        let cli = Cli::parse_from(["attendance-tracker", "view", "--format", "json", "-v"]);

        assert!(cli.verbose);
        match cli.command {
            Command::View { month, format } => {
                assert_eq!(month, None);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
