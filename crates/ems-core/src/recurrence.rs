use chrono::{Days, Months, NaiveDate};
use log::{debug, trace};

use crate::models::{Event, Occurrence, Recurrence};

/// Upper bound on forward steps taken for a single event, whatever its recurrence.
pub const MAX_ITERATIONS: usize = 365;

/// Advances `date` by one recurrence period.
///
/// Returns `None` when the recurrence has no step (`None` or an unsupported
/// value) or when the result would fall outside chrono's representable range.
/// Month and year steps clamp the day to the end of the target month, so a
/// series anchored on Jan 31 continues Feb 29, Mar 29, ...
#[inline]
pub fn step(date: NaiveDate, recurrence: &Recurrence) -> Option<NaiveDate> {
    match recurrence {
        Recurrence::Daily => date.checked_add_days(Days::new(1)),
        Recurrence::Weekly => date.checked_add_days(Days::new(7)),
        Recurrence::Monthly => date.checked_add_months(Months::new(1)),
        Recurrence::Yearly => date.checked_add_months(Months::new(12)),
        Recurrence::None | Recurrence::Unsupported(_) => None,
    }
}

/// Expands an event into its concrete occurrences within `[range_start, range_end]`.
///
/// # Behavior
/// - A non-recurring event comes back as a single occurrence equal to the
///   event, independent of the window.
/// - Otherwise the walk starts at the anchor date and moves forward one
///   period at a time until the date passes `range_end` or
///   [`MAX_ITERATIONS`] steps have been taken. Dates inside the window are
///   emitted in ascending order.
/// - Only the anchor itself (step 0) is marked as a non-instance. If the
///   anchor lies before the window, every emitted occurrence is an instance.
/// - An unsupported recurrence value emits the anchor (when in range) and
///   then stops. This is not an error.
pub fn expand(event: &Event, range_start: NaiveDate, range_end: NaiveDate) -> Vec<Occurrence> {
    if !event.recurrence.is_recurring() {
        return vec![Occurrence {
            event: event.clone(),
            original_event_id: None,
            is_recurring_instance: false,
        }];
    }

    let mut occurrences = Vec::new();
    let mut current = event.date;
    let mut iterations = 0;

    while current <= range_end && iterations < MAX_ITERATIONS {
        if current >= range_start {
            let mut instance = event.clone();
            instance.date = current;
            occurrences.push(Occurrence {
                event: instance,
                original_event_id: Some(event.id.clone()),
                is_recurring_instance: iterations > 0,
            });
        }

        current = match step(current, &event.recurrence) {
            Some(next) => next,
            None => {
                trace!(
                    "event {}: no step for recurrence '{}' from {}, stopping",
                    event.id,
                    event.recurrence,
                    current
                );
                return occurrences;
            }
        };
        iterations += 1;
    }

    if iterations == MAX_ITERATIONS && current <= range_end {
        trace!(
            "event {}: iteration cap reached at {} before {}",
            event.id,
            current,
            range_end
        );
    }

    debug!(
        "expanded event {} ({}) into {} occurrence(s) over {}..={}",
        event.id,
        event.recurrence,
        occurrences.len(),
        range_start,
        range_end
    );
    occurrences
}

/// Expands every event over the same window, preserving input order per event.
pub fn expand_all<'a, I>(events: I, range_start: NaiveDate, range_end: NaiveDate) -> Vec<Occurrence>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .flat_map(|event| expand(event, range_start, range_end))
        .collect()
}
