use anyhow::{Context, Result};
use ems_core::csv::{employee_template, serialize};
use ems_core::models::EXPORT_HEADERS;
use ems_core::store::load_employees;
use log::warn;
use owo_colors::{OwoColorize, Style};
use std::path::{Path, PathBuf};

use crate::cli::{ExportCommand, TemplateCommand};
use crate::config::Config;
use crate::util::write_output;

pub fn export_employees(command: ExportCommand, config: &Config) -> Result<()> {
    let employees = load_employees(&command.employees).with_context(|| {
        format!("Failed to load employees from '{}'", command.employees.display())
    })?;
    if employees.is_empty() {
        warn!("no employees in '{}', writing an empty file", command.employees.display());
    }

    let records: Vec<_> = employees.iter().map(|e| e.export_record()).collect();
    let contents = serialize(&records, &EXPORT_HEADERS);

    let output = command
        .output
        .unwrap_or_else(|| PathBuf::from(&config.export_filename));
    finish(&output, &contents, command.force, &format!("Exported {} employee(s)", records.len()))
}

pub fn write_template(command: TemplateCommand, config: &Config) -> Result<()> {
    let output = command
        .output
        .unwrap_or_else(|| PathBuf::from(&config.template_filename));
    finish(&output, &employee_template(), command.force, "Wrote import template")
}

fn finish(output: &Path, contents: &str, force: bool, summary: &str) -> Result<()> {
    if !write_output(output, contents, force)? {
        println!("Export cancelled.");
        return Ok(());
    }

    let success_style = Style::new().green().bold();
    println!(
        "{} {} to {}",
        "✓".style(success_style),
        summary,
        output.display().bright_white()
    );
    Ok(())
}
