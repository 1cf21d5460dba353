// Event geometry
// Converts event timestamps into hour-unit offsets for the time grid

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::event::Event;

/// Vertical placement of an event in a time grid sized at one unit per
/// hour: offset from midnight and duration, both in fractional hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventPosition {
    pub top: f32,
    pub height: f32,
}

/// Compute an event's vertical offset and height for time-grid rendering.
///
/// Geometry always derives from the event's own timestamps; the `date`
/// argument exists for call-site symmetry with the query functions and
/// does not clip the result. No clamping is performed: validation has
/// already rejected end-before-start drafts upstream.
pub fn event_position(event: &Event, _date: NaiveDate) -> EventPosition {
    let start_minutes = (event.start.hour() * 60 + event.start.minute()) as i32;
    let end_minutes = (event.end.hour() * 60 + event.end.minute()) as i32;

    EventPosition {
        top: start_minutes as f32 / 60.0,
        height: (end_minutes - start_minutes) as f32 / 60.0,
    }
}
