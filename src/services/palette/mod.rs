// Event colour palette
// Default colours assigned to events that carry none

use crate::models::event::Event;

/// Default event colours, cycled by collection position.
pub const EVENT_COLORS: [&str; 8] = [
    "#3b82f6", // blue
    "#10b981", // green
    "#f59e0b", // orange
    "#8b5cf6", // purple
    "#ef4444", // red
    "#06b6d4", // cyan
    "#ec4899", // pink
    "#6366f1", // indigo
];

/// Palette entry for a collection position, wrapping past the end.
pub fn color_for_index(index: usize) -> &'static str {
    EVENT_COLORS[index % EVENT_COLORS.len()]
}

/// The event's own colour, or the palette entry for its position when it
/// carries none.
pub fn event_color(event: &Event, index: usize) -> &str {
    event.color.as_deref().unwrap_or(color_for_index(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_palette_cycles_past_the_end() {
        assert_eq!(color_for_index(0), "#3b82f6");
        assert_eq!(color_for_index(7), "#6366f1");
        assert_eq!(color_for_index(8), "#3b82f6");
        assert_eq!(color_for_index(17), "#10b981");
    }

    #[test]
    fn test_event_color_prefers_own_color() {
        let now = Local::now();
        let mut event = Event::new("e", "Meeting", now, now);
        event.color = Some("#123456".to_string());

        assert_eq!(event_color(&event, 3), "#123456");
    }

    #[test]
    fn test_event_color_falls_back_to_palette() {
        let now = Local::now();
        let event = Event::new("e", "Meeting", now, now);

        assert_eq!(event_color(&event, 3), "#8b5cf6");
    }
}
