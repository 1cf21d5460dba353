// Calendar navigation state
// Reference date, active view, and selection a host keeps between renders

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::view::CalendarView;
use crate::utils::date::add_months;

/// View-model state of the calendar: the displayed reference date, the
/// active view, and an optional selected day.
///
/// Transitions that depend on "today" take it as an explicit argument so
/// the state never reads the wall clock itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    current_date: NaiveDate,
    view: CalendarView,
    selected_date: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(initial_date: NaiveDate, initial_view: CalendarView) -> Self {
        Self {
            current_date: initial_date,
            view: initial_view,
            selected_date: None,
        }
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Advance the displayed month. The day of month clamps in short
    /// months, so repeated navigation from the 31st never skips a month.
    pub fn next_month(&mut self) {
        self.current_date = add_months(self.current_date, 1);
        log::debug!("Navigated to {}", self.current_date);
    }

    /// Step the displayed month back.
    pub fn previous_month(&mut self) {
        self.current_date = add_months(self.current_date, -1);
        log::debug!("Navigated to {}", self.current_date);
    }

    /// Jump the calendar to today, selecting it as well.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_date = today;
        self.selected_date = Some(today);
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }
}
