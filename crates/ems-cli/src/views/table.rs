use comfy_table::{Attribute, Cell, Color, Row, Table};
use ems_core::csv::{CsvRecord, ValidationError};
use ems_core::models::{Employee, EventKind, Occurrence};
use owo_colors::{OwoColorize, Style};

fn kind_color(kind: &EventKind) -> Color {
    match kind.color_class() {
        "event-meeting" => Color::Blue,
        "event-holiday" => Color::Green,
        "event-deadline" => Color::Red,
        "event-client" => Color::Magenta,
        _ => Color::Reset,
    }
}

pub fn display_occurrences(occurrences: &[Occurrence]) {
    if occurrences.is_empty() {
        println!("No events found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Title", "Time", "Type", "Location"]);

    for occurrence in occurrences {
        let event = &occurrence.event;
        let mut row = Row::new();
        row.add_cell(Cell::new(event.date.format("%a %Y-%m-%d")));

        let mut display_title = String::new();
        if event.recurrence.is_recurring() {
            display_title.push('↻'); // Recurring symbol
            display_title.push(' ');
        }
        display_title.push_str(&event.title);
        let mut title_cell = Cell::new(display_title).fg(kind_color(&event.kind));
        if !occurrence.is_recurring_instance && event.recurrence.is_recurring() {
            title_cell = title_cell.add_attribute(Attribute::Bold);
        }
        row.add_cell(title_cell);

        let time = if event.is_all_day {
            "All Day".to_string()
        } else {
            match (&event.time, &event.end_time) {
                (Some(start), Some(end)) => format!("{} - {}", start, end),
                (Some(start), None) => start.clone(),
                _ => String::new(),
            }
        };
        row.add_cell(Cell::new(time));
        row.add_cell(Cell::new(event.kind.as_str()));
        row.add_cell(Cell::new(event.location.as_deref().unwrap_or("")));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_employees(employees: &[&Employee]) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Email", "Role", "Department", "Status", "Joined"]);

    for employee in employees {
        let mut row = Row::new();
        row.add_cell(Cell::new(&employee.name).add_attribute(Attribute::Bold));
        row.add_cell(Cell::new(&employee.email));
        row.add_cell(Cell::new(&employee.role));
        row.add_cell(Cell::new(&employee.department));

        let status_cell = Cell::new(&employee.status);
        let status_cell = match employee.status_class() {
            "active" => status_cell.fg(Color::Green),
            "leave" => status_cell.fg(Color::Yellow),
            _ => status_cell.fg(Color::DarkGrey),
        };
        row.add_cell(status_cell);
        row.add_cell(Cell::new(employee.join_date.as_deref().unwrap_or("")));
        table.add_row(row);
    }

    println!("{table}");
}

/// Preview of parsed CSV rows, columns in header order.
pub fn display_records(headers: &[String], records: &[CsvRecord]) {
    let mut table = Table::new();
    table.set_header(headers.iter().map(String::as_str).collect::<Vec<_>>());

    for record in records {
        table.add_row(
            headers
                .iter()
                .map(|h| Cell::new(record.get(h).unwrap_or("")))
                .collect::<Vec<_>>(),
        );
    }

    println!("{table}");
}

pub fn display_validation_errors(errors: &[ValidationError]) {
    let error_style = Style::new().red().bold();
    eprintln!(
        "{} Found {} problem(s) in the file:",
        "Error:".style(error_style),
        errors.len()
    );
    for error in errors {
        eprintln!("  {} {}", "→".red(), error);
    }
}
