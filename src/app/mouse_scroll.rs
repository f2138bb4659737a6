//! Mouse scroll handling
//!
//! The wheel over the popup steps the selection like the arrow keys.

use super::app_state::App;
use crate::layout::Region;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

pub fn handle_scroll(app: &mut App, region: Option<Region>, direction: ScrollDirection) {
    if region != Some(Region::Suggestions) || !app.suggestions.store.is_visible() {
        return;
    }

    match direction {
        ScrollDirection::Up => app.suggestions.store.prior(),
        ScrollDirection::Down => app.suggestions.store.next(),
    }
    app.mark_dirty();
}

#[cfg(test)]
#[path = "mouse_scroll_tests.rs"]
mod mouse_scroll_tests;
