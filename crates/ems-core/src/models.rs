use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::csv::CsvRecord;

/// How often a calendar event repeats.
///
/// Values outside the known set are kept verbatim in `Unsupported` so that
/// they survive a load/save cycle; expansion treats them as "stop here".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Unsupported(String),
}

impl Recurrence {
    pub fn as_str(&self) -> &str {
        match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Yearly => "yearly",
            Recurrence::Unsupported(raw) => raw,
        }
    }

    /// Returns true for anything other than `None`, including unsupported values.
    #[inline]
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Recurrence::None)
    }
}

impl From<&str> for Recurrence {
    fn from(s: &str) -> Self {
        match s {
            "" | "none" => Recurrence::None,
            "daily" => Recurrence::Daily,
            "weekly" => Recurrence::Weekly,
            "monthly" => Recurrence::Monthly,
            "yearly" => Recurrence::Yearly,
            other => Recurrence::Unsupported(other.to_string()),
        }
    }
}

impl From<Option<String>> for Recurrence {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Recurrence::from).unwrap_or_default()
    }
}

impl From<Recurrence> for String {
    fn from(value: Recurrence) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a calendar event, stored as `type` in the event JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    #[default]
    Event,
    Meeting,
    Holiday,
    Deadline,
    Personal,
    Anniversary,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Event => "event",
            EventKind::Meeting => "meeting",
            EventKind::Holiday => "holiday",
            EventKind::Deadline => "deadline",
            EventKind::Personal => "personal",
            EventKind::Anniversary => "anniversary",
            EventKind::Other(raw) => raw,
        }
    }

    /// Display class used when rendering the event in a calendar grid.
    pub fn color_class(&self) -> &'static str {
        match self {
            EventKind::Meeting => "event-meeting",
            EventKind::Holiday => "event-holiday",
            EventKind::Deadline => "event-deadline",
            EventKind::Anniversary => "event-client",
            EventKind::Event | EventKind::Personal | EventKind::Other(_) => "event-personal",
        }
    }
}

impl From<String> for EventKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "event" | "" => EventKind::Event,
            "meeting" => EventKind::Meeting,
            "holiday" => EventKind::Holiday,
            "deadline" => EventKind::Deadline,
            "personal" => EventKind::Personal,
            "anniversary" => EventKind::Anniversary,
            _ => EventKind::Other(s),
        }
    }
}

impl From<EventKind> for String {
    fn from(value: EventKind) -> Self {
        value.as_str().to_string()
    }
}

/// A calendar event as supplied by the event store.
///
/// Only `id`, `date` and `recurrence` matter to expansion; the remaining
/// display fields and any unknown keys are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(rename = "type", default)]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            recurrence: Recurrence::None,
            time: None,
            end_time: None,
            is_all_day: false,
            kind: EventKind::Event,
            location: None,
            description: None,
            extra: Map::new(),
        }
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }
}

/// One concrete dated instance of an [`Event`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    #[serde(flatten)]
    pub event: Event,
    /// Id of the anchor event. `None` when a non-recurring event is passed through as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_event_id: Option<String>,
    pub is_recurring_instance: bool,
}

impl Occurrence {
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.event.date
    }

    /// Id of the stored event that edits and deletes of this occurrence must target.
    pub fn source_id(&self) -> &str {
        self.original_event_id.as_deref().unwrap_or(&self.event.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Offline,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid employee status: {0}")]
pub struct ParseEmployeeStatusError(String);

impl FromStr for EmployeeStatus {
    type Err = ParseEmployeeStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(EmployeeStatus::Active),
            "On Leave" => Ok(EmployeeStatus::OnLeave),
            "Offline" => Ok(EmployeeStatus::Offline),
            _ => Err(ParseEmployeeStatusError(s.to_string())),
        }
    }
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 3] = [
        EmployeeStatus::Active,
        EmployeeStatus::OnLeave,
        EmployeeStatus::Offline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Offline => "Offline",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::OnLeave => "leave",
            EmployeeStatus::Offline => "offline",
        }
    }
}

/// Columns written by an employee export, in order.
pub const EXPORT_HEADERS: [&str; 6] = ["name", "email", "role", "department", "status", "join_date"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Employee {
    /// Unknown statuses display as offline.
    pub fn status_class(&self) -> &'static str {
        self.status
            .parse::<EmployeeStatus>()
            .unwrap_or(EmployeeStatus::Offline)
            .css_class()
    }

    pub fn join_date(&self) -> Option<NaiveDate> {
        self.join_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Projects the employee onto [`EXPORT_HEADERS`].
    pub fn export_record(&self) -> CsvRecord {
        let mut record = CsvRecord::with_capacity(EXPORT_HEADERS.len());
        record.insert("name", self.name.as_str());
        record.insert("email", self.email.as_str());
        record.insert("role", self.role.as_str());
        record.insert("department", self.department.as_str());
        record.insert("status", self.status.as_str());
        record.insert("join_date", self.join_date.as_deref().unwrap_or(""));
        record
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.role.to_lowercase().contains(needle)
            || self.department.to_lowercase().contains(needle)
    }
}

/// Case-insensitive search on name, role and department.
pub fn search<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let needle = term.to_lowercase();
    employees.iter().filter(|e| e.matches(&needle)).collect()
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}
