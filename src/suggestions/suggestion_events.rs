//! Keyboard dispatch for the suggestion list
//!
//! Down is always captured: it opens the list when hidden. Up, Enter, Tab
//! and Escape are captured only while the list is visible; otherwise they
//! pass through to the host untouched.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::input_adapter::{BoundField, InputAdapter};
use crate::error::AutosuggestError;

/// Whether the host should still see an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Consumed by the suggestion list
    Handled,
    /// Not ours; pass it on
    Ignored,
}

impl EventOutcome {
    pub fn is_handled(self) -> bool {
        self == EventOutcome::Handled
    }
}

/// Route a key press to the suggestion list
pub fn handle_suggestion_key(
    adapter: &mut InputAdapter,
    field: &mut dyn BoundField,
    key: KeyEvent,
) -> Result<EventOutcome, AutosuggestError> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Ok(EventOutcome::Ignored);
    }

    if key.code == KeyCode::Down {
        if adapter.store.is_visible() {
            adapter.store.next();
        } else {
            adapter.load(&field.value())?;
        }
        return Ok(EventOutcome::Handled);
    }

    if !adapter.store.is_visible() {
        return Ok(EventOutcome::Ignored);
    }

    match key.code {
        KeyCode::Up => adapter.store.prior(),
        KeyCode::Esc => adapter.hide(),
        KeyCode::Enter | KeyCode::Tab => {
            adapter.commit(field);
        }
        _ => return Ok(EventOutcome::Ignored),
    }

    Ok(EventOutcome::Handled)
}

#[cfg(test)]
#[path = "suggestion_events_tests.rs"]
mod suggestion_events_tests;
