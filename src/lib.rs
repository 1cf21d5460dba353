// Calendar Core Library
// Pure layout and event placement logic behind month/week calendar views

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::{Event, EventBuilder, EventDraft};
pub use models::view::CalendarView;
pub use services::event::geometry::{event_position, EventPosition};
pub use services::event::queries::{events_for_date, is_event_in_time_range};
pub use services::event::validate::{
    error_messages, validate_event, ValidationError, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
pub use services::event::EventStore;
pub use services::grid::{calendar_grid, week_days, CALENDAR_GRID_LEN, WEEK_LEN};
pub use services::navigation::CalendarState;
pub use services::palette::{color_for_index, event_color, EVENT_COLORS};
