// Date utility functions
// Calendar arithmetic and day-level predicates for grid and event queries

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

/// Number of one-hour rows in the week view's time axis.
pub const DAY_HOURS: u32 = 24;

/// First calendar day of the date's month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last calendar day of the date's month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let last_day = days_in_month_count(date.year(), date.month());
    date.with_day(last_day).unwrap_or(date)
}

/// Sunday on or before the given date. Weeks start on Sunday, a fixed
/// policy.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// Saturday on or after the given date.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

/// Shift a date by a signed number of calendar days.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Shift a date by a signed number of calendar months.
///
/// The day of month is clamped to the last valid day of the target month:
/// Jan 31 plus one month is Feb 28 (Feb 29 in leap years). Year boundaries
/// roll over in either direction.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let zero_based = date.year() * 12 + date.month() as i32 - 1 + months;
    let year = zero_based.div_euclid(12);
    let month = (zero_based.rem_euclid(12) + 1) as u32;
    let day = date.day().min(days_in_month_count(year, month));

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Number of days in the given month.
pub fn days_in_month_count(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    first_of_next
        .and_then(|d| d.pred_opt())
        .map_or(28, |d| d.day())
}

/// Every day of the date's month, first through last.
pub fn days_in_month(date: NaiveDate) -> Vec<NaiveDate> {
    let first = start_of_month(date);
    let last = end_of_month(date);

    let mut days = Vec::with_capacity(31);
    let mut day = first;
    while day <= last {
        days.push(day);
        day = add_days(day, 1);
    }
    days
}

/// Whether two timestamps fall on the same calendar day, ignoring
/// time-of-day.
pub fn is_same_day(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Whether two timestamps fall in the same month of the same year.
pub fn is_same_month(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Whether `date` falls on the same calendar day as `now`.
///
/// The current timestamp is an explicit argument so callers (and tests)
/// control the clock.
pub fn is_today(date: DateTime<Local>, now: DateTime<Local>) -> bool {
    is_same_day(date, now)
}

/// Truncate a timestamp to midnight of the same calendar day.
pub fn start_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(date.timezone()).single())
        .unwrap_or(date)
}

/// Whole days from `start` to `end`, rounded toward negative infinity.
pub fn days_between(start: DateTime<Local>, end: DateTime<Local>) -> i64 {
    const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
    (end - start).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Hour indices of the week view's vertical time axis, midnight through
/// 23:00.
pub fn time_slots() -> std::ops::Range<u32> {
    0..DAY_HOURS
}

/// Label for a one-hour time slot, e.g. `09:00`.
pub fn format_time_slot(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Long human-readable form of a date, e.g. `December 18, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
