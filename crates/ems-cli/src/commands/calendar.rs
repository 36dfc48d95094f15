use anyhow::{Context, Result};
use ems_core::calendar::{month_agenda, CalendarWindow};
use ems_core::models::Occurrence;
use ems_core::recurrence::expand_all;
use ems_core::store::{load_employees, load_events};
use log::info;

use crate::cli::{CalendarCommand, ExpandCommand};
use crate::config::Config;
use crate::util::{parse_day, parse_month};
use crate::views::table::display_occurrences;

pub fn show_calendar(command: CalendarCommand, config: &Config) -> Result<()> {
    let focal = parse_month(command.month.as_deref())?;
    let window = CalendarWindow::with_margin(
        focal,
        config.calendar.months_before,
        config.calendar.months_after,
    );

    let events = load_events(&command.events)
        .with_context(|| format!("Failed to load events from '{}'", command.events.display()))?;
    let employees = match &command.employees {
        Some(path) => load_employees(path)
            .with_context(|| format!("Failed to load employees from '{}'", path.display()))?,
        None => Vec::new(),
    };

    info!(
        "showing {} event(s) between {} and {}",
        events.len(),
        window.start,
        window.end
    );
    let agenda = month_agenda(&events, &employees, focal, window);
    print_occurrences(&agenda, command.json)
}

pub fn expand_events(command: ExpandCommand) -> Result<()> {
    let from = parse_day(&command.from)?;
    let to = parse_day(&command.to)?;

    let events = load_events(&command.events)
        .with_context(|| format!("Failed to load events from '{}'", command.events.display()))?;

    let mut occurrences = expand_all(&events, from, to);
    occurrences.sort_by_key(Occurrence::date);
    print_occurrences(&occurrences, command.json)
}

fn print_occurrences(occurrences: &[Occurrence], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(occurrences)?);
    } else {
        display_occurrences(occurrences);
    }
    Ok(())
}
