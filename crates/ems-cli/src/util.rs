use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use dialoguer::Confirm;
use ems_core::error::CoreError;
use std::fs;
use std::path::Path;

/// Parses `YYYY-MM` into the first day of that month. `None` gives today's date,
/// which callers treat as the current month.
pub fn parse_month(month: Option<&str>) -> Result<NaiveDate> {
    match month {
        None => Ok(Local::now().date_naive()),
        Some(m) => NaiveDate::parse_from_str(&format!("{}-01", m.trim()), "%Y-%m-%d").map_err(|_| {
            anyhow!(CoreError::InvalidInput(format!(
                "Month '{}' must look like YYYY-MM",
                m
            )))
        }),
    }
}

pub fn parse_day(day: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d").map_err(|_| {
        anyhow!(CoreError::InvalidInput(format!(
            "Date '{}' must look like YYYY-MM-DD",
            day
        )))
    })
}

/// Writes `contents` to `path`, asking before replacing an existing file
/// unless `force` is set. Returns `false` when the user declined.
pub fn write_output(path: &Path, contents: &str, force: bool) -> Result<bool> {
    if path.exists() && !force {
        let confirmation = Confirm::new()
            .with_prompt(format!("'{}' already exists. Overwrite it?", path.display()))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            return Ok(false);
        }
    }

    fs::write(path, contents).with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(true)
}
