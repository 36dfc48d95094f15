use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use super::CsvRecord;
use crate::models::EmployeeStatus;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static DATE_RE: OnceLock<Regex> = OnceLock::new();

/// A problem found in one data row. `row` counts the header as row 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub row: usize,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.row, self.message)
    }
}

/// Rules applied by [`validate`]. Field order is kept in error output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub required_fields: Vec<String>,
    pub allowed_statuses: Vec<String>,
}

impl Schema {
    pub fn new<R, S>(required_fields: R, allowed_statuses: S) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            required_fields: required_fields.into_iter().map(Into::into).collect(),
            allowed_statuses: allowed_statuses.into_iter().map(Into::into).collect(),
        }
    }

    /// The rules used for employee imports.
    pub fn employee() -> Self {
        Self::new(
            ["name", "email", "role", "department"],
            EmployeeStatus::ALL.iter().map(EmployeeStatus::as_str),
        )
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::employee()
    }
}

/// Checks every record against `schema` and returns all problems found.
///
/// Per row the checks run in a fixed order: required fields (one error per
/// missing or blank field), then `email`, `status` and `join_date`. The last
/// three are only checked when the value is non-empty. An empty result means
/// the input is valid.
pub fn validate(records: &[CsvRecord], schema: &Schema) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let row = index + 2;
        let mut push = |message: String| errors.push(ValidationError { row, message });

        for field in &schema.required_fields {
            if record.get(field).map_or(true, |v| v.trim().is_empty()) {
                push(format!("Missing required field \"{}\"", field));
            }
        }

        if let Some(email) = non_empty(record, "email") {
            if !is_valid_email(email) {
                push(format!("Invalid email format \"{}\"", email));
            }
        }

        if let Some(status) = non_empty(record, "status") {
            if !schema.allowed_statuses.iter().any(|s| s == status) {
                push(format!(
                    "Invalid status \"{}\". Must be one of: {}",
                    status,
                    schema.allowed_statuses.join(", ")
                ));
            }
        }

        if let Some(join_date) = non_empty(record, "join_date") {
            if !is_valid_date(join_date) {
                push(format!("Invalid date format \"{}\". Use YYYY-MM-DD", join_date));
            }
        }
    }

    errors
}

fn non_empty<'a>(record: &'a CsvRecord, key: &str) -> Option<&'a str> {
    record.get(key).filter(|v| !v.is_empty())
}

/// `local@domain.tld`-shaped: no whitespace, exactly one `@`, a dot after it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
        .is_match(email)
}

/// Strict `YYYY-MM-DD` that also names a real calendar day.
pub fn is_valid_date(date: &str) -> bool {
    DATE_RE
        .get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"))
        .is_match(date)
        && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}
