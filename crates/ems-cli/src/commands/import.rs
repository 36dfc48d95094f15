use anyhow::{anyhow, Context, Result};
use ems_core::csv::{validate, Schema};
use ems_core::store::read_csv_file;
use owo_colors::{OwoColorize, Style};

use crate::cli::ImportCommand;
use crate::views::table::{display_records, display_validation_errors};

/// Parses and validates an employee CSV. Nothing is printed as importable
/// unless every row passes.
pub fn import_employees(command: ImportCommand) -> Result<()> {
    let parsed = read_csv_file(&command.file)
        .with_context(|| format!("Could not import '{}'", command.file.display()))?;

    let errors = validate(&parsed.records, &Schema::employee());
    if !errors.is_empty() {
        display_validation_errors(&errors);
        return Err(anyhow!("{} validation error(s) in '{}'", errors.len(), command.file.display()));
    }

    if command.json {
        println!("{}", serde_json::to_string_pretty(&parsed.records)?);
        return Ok(());
    }

    display_records(&parsed.headers, &parsed.records);
    let success_style = Style::new().green().bold();
    println!(
        "{} Ready to import {} employee(s)",
        "✓".style(success_style),
        parsed.records.len()
    );
    Ok(())
}
