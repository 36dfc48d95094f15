use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Employee management toolkit: calendar agenda, employee directory and CSV import/export
#[derive(Parser, Debug)]
#[command(name = "ems", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the agenda around a month, including work anniversaries
    Calendar(CalendarCommand),
    /// Expand events over an explicit date range
    Expand(ExpandCommand),
    /// Check an employee CSV file and preview its rows
    Import(ImportCommand),
    /// Write employees to a CSV file
    Export(ExportCommand),
    /// Write an example employee CSV file
    Template(TemplateCommand),
    /// List employees
    Employees(EmployeesCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct CalendarCommand {
    /// JSON file containing an array of events
    #[arg(short, long)]
    pub events: PathBuf,
    /// JSON file containing an array of employees, used for anniversaries
    #[arg(long)]
    pub employees: Option<PathBuf>,
    /// Focal month (YYYY-MM). Defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,
    /// Print occurrences as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ExpandCommand {
    /// JSON file containing an array of events
    #[arg(short, long)]
    pub events: PathBuf,
    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,
    /// Last day of the range (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: String,
    /// Print occurrences as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ImportCommand {
    /// The CSV file to check
    pub file: PathBuf,
    /// Print the parsed records as JSON instead of a preview table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportCommand {
    /// JSON file containing an array of employees
    #[arg(short, long)]
    pub employees: PathBuf,
    /// Output file. Defaults to the configured export filename
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Overwrite an existing file without confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TemplateCommand {
    /// Output file. Defaults to the configured template filename
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Overwrite an existing file without confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct EmployeesCommand {
    /// JSON file containing an array of employees
    #[arg(short, long)]
    pub employees: PathBuf,
    /// Only show employees whose name, role or department contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}
