// Event services
// In-memory event collection plus the pure query, geometry, and
// validation helpers

pub mod geometry;
pub mod queries;
pub mod validate;

use chrono::NaiveDate;

use crate::models::event::{Event, EventDraft};

/// Owned, ordered collection of events with a selection cursor.
///
/// Mirrors the collection a host keeps between renders: insertion order
/// is preserved, which the stable-filter guarantee of
/// [`queries::events_for_date`] relies on. The pure query functions never
/// touch the store; they take slices.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    selected_id: Option<String>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with an existing collection, keeping its order.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            selected_id: None,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Append an event to the collection.
    pub fn add(&mut self, event: Event) {
        log::debug!("Added event '{}' ({})", event.title, event.id);
        self.events.push(event);
    }

    /// Merge the draft's present fields into the event with the given id.
    /// `None` fields are left unchanged. Returns `false` when no event has
    /// the id.
    pub fn update(&mut self, id: &str, patch: EventDraft) -> bool {
        let Some(event) = self.events.iter_mut().find(|event| event.id == id) else {
            log::warn!("Update for unknown event id {}", id);
            return false;
        };

        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(description) = patch.description {
            event.description = Some(description);
        }
        if let Some(start) = patch.start {
            event.start = start;
        }
        if let Some(end) = patch.end {
            event.end = end;
        }
        if let Some(color) = patch.color {
            event.color = Some(color);
        }
        if let Some(category) = patch.category {
            event.category = Some(category);
        }

        log::debug!("Updated event {}", id);
        true
    }

    /// Delete the event with the given id, clearing the selection if it
    /// pointed at the removed event. Returns `false` when no event has
    /// the id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);

        if self.events.len() == before {
            log::warn!("Remove for unknown event id {}", id);
            return false;
        }

        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        log::debug!("Removed event {}", id);
        true
    }

    /// Set or clear the selection cursor. Selecting an unknown id leaves
    /// `selected` returning `None` until a matching event is added.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected_id = id.map(String::from);
    }

    pub fn selected(&self) -> Option<&Event> {
        self.selected_id.as_deref().and_then(|id| self.get(id))
    }

    /// Events whose day-span contains `date`, in insertion order.
    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        queries::events_for_date(&self.events, date)
    }
}
