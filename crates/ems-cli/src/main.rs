use clap::Parser;
use ems_core::error::CoreError;
use env_logger::Env;
use log::warn;
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod util;
mod views;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = config::Config::new().unwrap_or_else(|e| {
        warn!("ignoring invalid configuration: {}", e);
        config::Config::default()
    });

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Calendar(command) => commands::calendar::show_calendar(command, &config),
        cli::Commands::Expand(command) => commands::calendar::expand_events(command),
        cli::Commands::Import(command) => commands::import::import_employees(command),
        cli::Commands::Export(command) => commands::export::export_employees(command, &config),
        cli::Commands::Template(command) => commands::export::write_template(command, &config),
        cli::Commands::Employees(command) => commands::employees::list_employees(command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.chain().find_map(|e| e.downcast_ref::<CoreError>()) {
        Some(CoreError::MalformedInput) => {
            eprintln!("{} {}", "Error:".style(error_style), err);
            eprintln!("  {}", CoreError::MalformedInput.yellow());
        }
        Some(CoreError::RowArity { row, found, expected }) => {
            eprintln!("{} {}", "Error:".style(error_style), err);
            eprintln!(
                "  Row {} has {} columns, expected {}",
                row.yellow(),
                found.yellow(),
                expected
            );
        }
        Some(CoreError::NotCsvFile(path)) => {
            eprintln!(
                "{} Please select a valid CSV file (got '{}')",
                "Error:".style(error_style),
                path.yellow()
            );
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
