//! Event handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Terminal event classification.
pub struct EventHandler;

impl EventHandler {
    /// Returns the key of a press event. Repeats and releases are ignored.
    #[must_use]
    pub fn key_press(event: &Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
            _ => None,
        }
    }

    /// Checks for the interrupt chord, which quits from any scope.
    #[must_use]
    pub fn is_force_quit(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Returns whether the event changes what is on screen.
    #[must_use]
    pub const fn needs_redraw(event: &Event) -> bool {
        matches!(event, Event::Key(_) | Event::Resize(_, _) | Event::FocusGained)
    }
}
