use anyhow::{Context, Result};
use ems_core::models::search;
use ems_core::store::load_employees;

use crate::cli::EmployeesCommand;
use crate::views::table::display_employees;

pub fn list_employees(command: EmployeesCommand) -> Result<()> {
    let employees = load_employees(&command.employees).with_context(|| {
        format!("Failed to load employees from '{}'", command.employees.display())
    })?;

    let matches = search(&employees, command.search.as_deref().unwrap_or(""));
    display_employees(&matches);
    Ok(())
}
