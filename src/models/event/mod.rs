// Event module
// Calendar event value record and its form-side draft shape

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::services::event::validate::{validate_event, ValidationError};

/// Calendar event record.
///
/// Events are plain data owned by the caller; the core only reads fields
/// and returns derived values. `id` is caller-assigned and unique within
/// a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub color: Option<String>,
    pub category: Option<String>,
}

impl Event {
    /// Create an event with the required fields only.
    ///
    /// # Examples
    /// ```
    /// use calendar_core::Event;
    /// use chrono::Local;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("evt-1", "Team Meeting", start, end);
    /// assert_eq!(event.title, "Team Meeting");
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            start,
            end,
            color: None,
            category: None,
        }
    }

    /// Create a builder for constructing events with optional fields.
    /// The builder validates field contents on `build()`.
    pub fn builder(id: impl Into<String>) -> EventBuilder {
        EventBuilder::new(id)
    }

    /// Get the duration of the event.
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// Candidate event shape produced by a form before validation.
///
/// Every field is optional; `validate_event` reports what is missing or
/// out of bounds. Doubles as a patch for `EventStore::update`, where a
/// `None` field means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub color: Option<String>,
    pub category: Option<String>,
}

impl EventDraft {
    /// Pre-fill a draft from an existing event, for edit forms.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: Some(event.title.clone()),
            description: event.description.clone(),
            start: Some(event.start),
            end: Some(event.end),
            color: event.color.clone(),
            category: event.category.clone(),
        }
    }

    /// Validate the draft and convert it into an event with the given id.
    ///
    /// Returns every validation error at once, so an unvalidated draft
    /// can never become an `Event`.
    pub fn into_event(self, id: impl Into<String>) -> Result<Event, Vec<ValidationError>> {
        let errors = validate_event(&self);
        if !errors.is_empty() {
            return Err(errors);
        }

        // An empty error list guarantees title, start, and end are present.
        let (Some(title), Some(start), Some(end)) = (self.title, self.start, self.end) else {
            unreachable!("validate_event rejects drafts with missing required fields");
        };

        Ok(Event {
            id: id.into(),
            title,
            description: self.description,
            start,
            end,
            color: self.color,
            category: self.category,
        })
    }
}

/// Builder for creating events with optional fields.
pub struct EventBuilder {
    id: String,
    draft: EventDraft,
}

impl EventBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            draft: EventDraft::default(),
        }
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.draft.title = Some(title.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.draft.description = Some(description.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.draft.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.draft.end = Some(end);
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.draft.color = Some(color.into());
        self
    }

    /// Set the event category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.draft.category = Some(category.into());
        self
    }

    /// Build the event, validating field contents.
    pub fn build(self) -> Result<Event, Vec<ValidationError>> {
        self.draft.into_event(self.id)
    }
}
