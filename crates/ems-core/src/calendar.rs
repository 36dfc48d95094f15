use chrono::{Datelike, Months, NaiveDate};
use log::debug;
use serde_json::Map;

use crate::models::{Employee, Event, EventKind, Occurrence, Recurrence};
use crate::recurrence::expand_all;

/// Inclusive date window around a focal month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CalendarWindow {
    /// One month either side of the month containing `focal`.
    pub fn around(focal: NaiveDate) -> Self {
        Self::with_margin(focal, 1, 1)
    }

    /// From the first day `before` months ahead of the focal month to the
    /// last day `after` months past it.
    pub fn with_margin(focal: NaiveDate, before: u32, after: u32) -> Self {
        let month_start = first_of_month(focal);
        let start = month_start
            .checked_sub_months(Months::new(before))
            .unwrap_or(NaiveDate::MIN);
        let end = month_start
            .checked_add_months(Months::new(after.saturating_add(1)))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// English ordinal suffix for `n`: 1st, 2nd, 3rd, 4th, 11th, 21st, 112th.
pub fn ordinal_suffix(n: i32) -> &'static str {
    let n = n.rem_euclid(100);
    if (11..=13).contains(&n) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Builds the all-day work anniversary event for `employee` in `year`.
///
/// Returns `None` when the employee has no parseable join date or when `year`
/// is not after the join year. A Feb 29 join date falls on Mar 1 in common
/// years.
pub fn anniversary_event(employee: &Employee, year: i32) -> Option<Event> {
    let joined = employee.join_date()?;
    let years = year - joined.year();
    if years <= 0 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, joined.month(), joined.day()).or_else(|| {
        NaiveDate::from_ymd_opt(year, joined.month(), 1)?.checked_add_months(Months::new(1))
    })?;

    Some(Event {
        id: format!("anniversary-{}", employee.id),
        title: format!(
            "{}'s {}{} Work Anniversary",
            employee.name,
            years,
            ordinal_suffix(years)
        ),
        date,
        recurrence: Recurrence::None,
        time: Some("All Day".to_string()),
        end_time: None,
        is_all_day: true,
        kind: EventKind::Anniversary,
        location: Some("Office Celebration".to_string()),
        description: None,
        extra: Map::new(),
    })
}

/// Everything to show around `focal`: work anniversaries for the focal year
/// plus every stored event expanded over `window`, ordered by date.
///
/// Entries on the same date keep their input order, anniversaries first.
pub fn month_agenda(
    events: &[Event],
    employees: &[Employee],
    focal: NaiveDate,
    window: CalendarWindow,
) -> Vec<Occurrence> {
    let mut agenda: Vec<Occurrence> = employees
        .iter()
        .filter_map(|e| anniversary_event(e, focal.year()))
        .map(|event| Occurrence {
            event,
            original_event_id: None,
            is_recurring_instance: false,
        })
        .collect();
    let anniversaries = agenda.len();

    agenda.extend(expand_all(events, window.start, window.end));
    agenda.sort_by_key(Occurrence::date);

    debug!(
        "agenda for {}: {} anniversary(ies), {} entries total over {}..={}",
        focal.format("%Y-%m"),
        anniversaries,
        agenda.len(),
        window.start,
        window.end
    );
    agenda
}
