//! # EMS Core Library
//!
//! Calendar and employee-data logic for the EMS toolkit. Every operation here
//! is a pure, synchronous function of its inputs; storage, file selection and
//! rendering belong to callers.
//!
//! ## Core Modules
//!
//! - [`recurrence`]: expansion of a recurring event into dated occurrences
//! - [`calendar`]: focal-month windows, work anniversaries and agendas
//! - [`csv`]: line-based CSV parsing, validation, serialization and the import template
//! - [`models`]: events, occurrences and employees
//! - [`store`]: JSON and CSV file loading
//! - [`error`]: error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ems_core::models::{Event, Recurrence};
//! use ems_core::recurrence::expand;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let standup = Event::new("evt-1", "Standup", start).with_recurrence(Recurrence::Daily);
//!
//! let occurrences = expand(&standup, start, end);
//! assert_eq!(occurrences.len(), 5);
//! assert!(!occurrences[0].is_recurring_instance);
//!
//! let parsed = ems_core::csv::parse("name,email\nJohn,j@x.com").unwrap();
//! assert_eq!(parsed.records[0].get("name"), Some("John"));
//! ```

pub mod calendar;
pub mod csv;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod store;
