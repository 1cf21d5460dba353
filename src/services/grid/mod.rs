// Calendar grid construction
// Builds the 42-cell month grid and the 7-day week strip

use chrono::NaiveDate;

use crate::utils::date::{
    add_days, end_of_month, end_of_week, start_of_month, start_of_week,
};

/// Cell count of the month grid: 6 full weeks of 7 days.
pub const CALENDAR_GRID_LEN: usize = 42;
/// Cell count of the week strip.
pub const WEEK_LEN: usize = 7;

/// The fixed 42-cell month grid for the month containing `reference`.
///
/// Cells run from the Sunday on/before the first of the month through 6
/// full weeks, so months spanning 4 or 5 weeks are padded with leading
/// and trailing out-of-month days. Only the reference date's year and
/// month matter; any day of the month produces the same grid.
pub fn calendar_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let start = start_of_week(start_of_month(reference));
    let end = end_of_week(end_of_month(reference));

    let mut days = Vec::with_capacity(CALENDAR_GRID_LEN);
    let mut day = start;
    while day <= end {
        days.push(day);
        day = add_days(day, 1);
    }

    // Months spanning fewer than 6 weeks keep extending past the last
    // Saturday until the grid is rectangular
    while days.len() < CALENDAR_GRID_LEN {
        days.push(day);
        day = add_days(day, 1);
    }
    days.truncate(CALENDAR_GRID_LEN);

    days
}

/// The 7 days of the week containing `reference`, Sunday through
/// Saturday.
pub fn week_days(reference: NaiveDate) -> Vec<NaiveDate> {
    let start = start_of_week(reference);
    (0..WEEK_LEN as i64).map(|offset| add_days(start, offset)).collect()
}
