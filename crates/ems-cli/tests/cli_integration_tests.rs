/// CLI integration tests for ems
///
/// These tests run the binary as a black box against fixture files in a
/// temporary working directory.

use predicates::prelude::*;
use std::fs;

mod helpers;
use helpers::{CliTestHarness, TestFixtures};

#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("calendar"))
        .stdout(predicate::str::contains("import"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("ems"));

    harness
        .run_failure(&["invalid-command"])
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_template_writes_default_file() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["template"])
        .stdout(predicate::str::contains("Wrote import template"));

    let text = harness.read("employee_template.csv");
    assert!(text.starts_with("name,email,role,department,status,join_date\n"));
    assert!(text.contains("Jane Smith,jane.smith@example.com,Product Manager,Product,Active,2024-02-20"));
}

#[test]
fn test_template_respects_config_file() {
    let harness = CliTestHarness::new();
    fs::write(harness.dir().join("ems.toml"), "template_filename = \"blank.csv\"\n").unwrap();

    harness.run_success(&["template"]);
    assert!(harness.path("blank.csv").exists());
    assert!(!harness.path("employee_template.csv").exists());
}

#[test]
fn test_template_then_import_succeeds() {
    let harness = CliTestHarness::new();
    harness.run_success(&["template", "--output", "t.csv"]);

    harness
        .run_success(&["import", "t.csv"])
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Ready to import 2 employee(s)"));
}

#[test]
fn test_import_json_output() {
    let harness = CliTestHarness::new();
    harness.run_success(&["template", "-o", "t.csv"]);

    let output = harness
        .command()
        .args(["import", "t.csv", "--json"])
        .output()
        .expect("Failed to run ems");
    assert!(output.status.success());

    let records: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "John Doe");
    assert_eq!(records[1]["join_date"], "2024-02-20");
}

#[test]
fn test_import_requires_schema_columns() {
    let harness = CliTestHarness::new();
    let file = harness.write("staff.csv", "name,location\nAnn,\"Room 4, Building B\"\n");

    harness
        .run_failure(&["import", &file])
        .stderr(predicate::str::contains("Row 2: Missing required field \"email\""))
        .stderr(predicate::str::contains("Row 2: Missing required field \"name\"").not());
}

#[test]
fn test_import_reports_all_validation_errors() {
    let harness = CliTestHarness::new();
    let file = harness.write("bad.csv", TestFixtures::invalid_import_csv());

    harness
        .run_failure(&["import", &file])
        .stderr(predicate::str::contains("Row 2: Missing required field \"name\""))
        .stderr(predicate::str::contains(
            "Row 2: Invalid status \"Retired\". Must be one of: Active, On Leave, Offline",
        ))
        .stderr(predicate::str::contains("Row 3: Invalid email format \"bob-at-example\""))
        .stderr(predicate::str::contains("Row 3: Invalid date format \"2024-02-30\". Use YYYY-MM-DD"))
        .stderr(predicate::str::contains("4 validation error(s)"));
}

#[test]
fn test_import_accepts_byte_order_mark() {
    let harness = CliTestHarness::new();
    let file = harness.write(
        "excel.csv",
        "\u{feff}name,email,role,department,status,join_date\r\n\
         John Doe,john@example.com,Developer,Engineering,Active,2024-01-15\r\n",
    );

    harness
        .run_success(&["import", &file])
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Ready to import 1 employee(s)"));
}

#[test]
fn test_import_parse_failures() {
    let harness = CliTestHarness::new();

    let header_only = harness.write("header.csv", "name,email\n");
    harness
        .run_failure(&["import", &header_only])
        .stderr(predicate::str::contains(
            "CSV file must contain headers and at least one row of data",
        ));

    let ragged = harness.write("ragged.csv", "name,email\nJohn\n");
    harness
        .run_failure(&["import", &ragged])
        .stderr(predicate::str::contains("has"))
        .stderr(predicate::str::contains("columns, expected 2"));

    let not_csv = harness.write("staff.txt", "name,email\nJohn,j@x.com\n");
    harness
        .run_failure(&["import", &not_csv])
        .stderr(predicate::str::contains("Please select a valid CSV file"));
}

#[test]
fn test_export_round_trips_through_import() {
    let harness = CliTestHarness::new();
    let employees = harness.write("employees.json", TestFixtures::employees_json());

    harness
        .run_success(&["export", "--employees", &employees, "--output", "out.csv"])
        .stdout(predicate::str::contains("Exported 3 employee(s)"));

    let text = harness.read("out.csv");
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("Grace Hopper,grace@example.com,\"Admiral, Retd.\",Navy,On Leave,2024-01-02"));
    assert!(text.ends_with("Alan Turing,alan@example.com,Researcher,Research,Offline,"));

    harness
        .run_success(&["import", "out.csv"])
        .stdout(predicate::str::contains("Ready to import 3 employee(s)"));
}

#[test]
fn test_export_existing_file_requires_force() {
    let harness = CliTestHarness::new();
    let employees = harness.write("employees.json", TestFixtures::employees_json());
    harness.write("employees.csv", "keep me");

    // No terminal to confirm on, so the prompt declines.
    harness
        .run_success(&["export", "--employees", &employees])
        .stdout(predicate::str::contains("Export cancelled."));
    assert_eq!(harness.read("employees.csv"), "keep me");

    harness.run_success(&["export", "--employees", &employees, "--force"]);
    assert!(harness.read("employees.csv").starts_with("name,email"));
}

#[test]
fn test_employees_search() {
    let harness = CliTestHarness::new();
    let employees = harness.write("employees.json", TestFixtures::employees_json());

    harness
        .run_success(&["employees", "--employees", &employees, "--search", "ENGIN"])
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("Grace Hopper").not());

    harness
        .run_success(&["employees", "--employees", &employees, "--search", "payroll"])
        .stdout(predicate::str::contains("No employees found."));
}

#[test]
fn test_calendar_month_view() {
    let harness = CliTestHarness::new();
    let events = harness.write("events.json", TestFixtures::events_json());
    let employees = harness.write("employees.json", TestFixtures::employees_json());

    harness
        .run_success(&[
            "calendar", "--events", &events, "--employees", &employees, "--month", "2024-03",
        ])
        .stdout(predicate::str::contains("Standup"))
        .stdout(predicate::str::contains("09:30 - 09:45"))
        .stdout(predicate::str::contains("HQ, Floor 2"))
        .stdout(predicate::str::contains("Ada Lovelace's 5th Work Anniversary"))
        .stdout(predicate::str::contains("Grace Hopper's").not());
}

#[test]
fn test_calendar_json_marks_instances() {
    let harness = CliTestHarness::new();
    let events = harness.write("events.json", TestFixtures::events_json());

    let output = harness
        .command()
        .args(["calendar", "--events", events.as_str(), "--month", "2024-03", "--json"])
        .output()
        .expect("Failed to run ems");
    assert!(output.status.success());

    let occurrences: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let standups: Vec<_> = occurrences.iter().filter(|o| o["id"] == "standup").collect();

    // Mondays 2024-03-04 .. 2024-04-29
    assert_eq!(standups.len(), 9);
    assert_eq!(standups[0]["is_recurring_instance"], false);
    assert!(standups[1..].iter().all(|o| o["is_recurring_instance"] == true));
    assert!(standups.iter().all(|o| o["original_event_id"] == "standup"));

    // Unsupported cadence shows the anchor once.
    assert_eq!(occurrences.iter().filter(|o| o["id"] == "odd").count(), 1);
}

#[test]
fn test_calendar_rejects_bad_month() {
    let harness = CliTestHarness::new();
    let events = harness.write("events.json", TestFixtures::events_json());

    harness
        .run_failure(&["calendar", "--events", &events, "--month", "March"])
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_expand_range() {
    let harness = CliTestHarness::new();
    let events = harness.write("events.json", TestFixtures::events_json());

    let output = harness
        .command()
        .args(["expand", "--events", events.as_str(), "--from", "2024-03-01", "--to", "2024-03-12", "--json"])
        .output()
        .expect("Failed to run ems");
    assert!(output.status.success());

    let occurrences: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let dates: Vec<_> = occurrences.iter().map(|o| o["date"].as_str().unwrap().to_string()).collect();
    // standup x2, odd anchor, launch (non-recurring, always included)
    assert_eq!(dates, vec!["2024-03-04", "2024-03-10", "2024-03-11", "2024-03-20"]);
}

#[test]
fn test_missing_events_file() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&["expand", "--events", "missing.json", "--from", "2024-01-01", "--to", "2024-01-31"])
        .stderr(predicate::str::contains("Failed to load events"));
}
