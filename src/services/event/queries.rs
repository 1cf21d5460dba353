// Event queries
// Day and time-slot membership tests driving cell assignment

use chrono::{NaiveDate, Timelike};

use crate::models::event::Event;

/// Every event whose inclusive day-span contains `date`.
///
/// A multi-day event appears on every day it spans, not just its start
/// day. The filter is stable: results keep the input collection's order.
pub fn events_for_date<'a>(events: &'a [Event], date: NaiveDate) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| {
            let first_day = event.start.date_naive();
            let last_day = event.end.date_naive();
            first_day <= date && date <= last_day
        })
        .collect()
}

/// Whether an event overlaps the hour range `[start_hour, end_hour)` on
/// the given day.
///
/// The day match is keyed off the event's start timestamp only: an event
/// whose time range crosses midnight does not surface in the following
/// day's slots. Overlap itself is the standard half-open interval test,
/// so an event starting exactly at `end_hour` does not match.
pub fn is_event_in_time_range(
    event: &Event,
    date: NaiveDate,
    start_hour: u32,
    end_hour: u32,
) -> bool {
    if event.start.date_naive() != date {
        return false;
    }

    let event_start_hour = event.start.hour();
    let event_end_hour = event.end.hour();

    event_start_hour < end_hour && event_end_hour > start_hour
}
