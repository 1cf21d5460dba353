// Test fixtures - reusable test data
// Provides consistent dates and events across the integration tests

use calendar_core::Event;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Build a local timestamp from fixture components.
pub fn local_dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Build a calendar date from fixture components.
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// One-hour standup on Dec 18, 2025, 09:00-10:00
    pub fn standup() -> Event {
        Event::builder("standup")
            .title("Morning Standup")
            .start(local_dt(2025, 12, 18, 9, 0))
            .end(local_dt(2025, 12, 18, 10, 0))
            .color("#10b981")
            .build()
            .expect("valid fixture event")
    }

    /// Multi-day offsite spanning Dec 18 09:00 through Dec 19 11:30
    pub fn offsite() -> Event {
        Event::builder("offsite")
            .title("Team Offsite")
            .description("Two days of planning")
            .start(local_dt(2025, 12, 18, 9, 0))
            .end(local_dt(2025, 12, 19, 11, 30))
            .category("Work")
            .build()
            .expect("valid fixture event")
    }

    /// Afternoon review on Dec 18, 2025, 14:00-15:30; carries no colour
    pub fn afternoon_review() -> Event {
        Event::builder("review")
            .title("Design Review")
            .start(local_dt(2025, 12, 18, 14, 0))
            .end(local_dt(2025, 12, 18, 15, 30))
            .build()
            .expect("valid fixture event")
    }

    /// The full sample collection, in insertion order
    pub fn sample_set() -> Vec<Event> {
        vec![standup(), offsite(), afternoon_review()]
    }
}
