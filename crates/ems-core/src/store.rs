//! File-backed sources for events, employees and CSV imports.

use log::debug;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::csv::{ensure_csv_path, parse, ParsedCsv};
use crate::error::CoreError;
use crate::models::{Employee, Event};

fn load_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CoreError> {
    let text = fs::read_to_string(path)?;
    let items: Vec<T> = serde_json::from_str(&text)?;
    debug!("loaded {} item(s) from {}", items.len(), path.display());
    Ok(items)
}

/// Reads a JSON array of events.
pub fn load_events(path: &Path) -> Result<Vec<Event>, CoreError> {
    load_json_array(path)
}

/// Reads a JSON array of employees.
pub fn load_employees(path: &Path) -> Result<Vec<Employee>, CoreError> {
    load_json_array(path)
}

/// Reads and parses a user-selected CSV file. The path must end in `.csv`.
pub fn read_csv_file(path: &Path) -> Result<ParsedCsv, CoreError> {
    ensure_csv_path(path)?;
    let text = fs::read_to_string(path)?;
    parse(&text)
}
