//! Mouse hover handling
//!
//! Hovering a suggestion row moves the selection cursor onto it.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;
use crate::suggestions::suggestions_render::item_at_row;

pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if region != Some(Region::Suggestions) {
        return;
    }
    let Some(popup) = app.layout_regions.suggestions else {
        return;
    };

    let count = app.suggestions.store.items().len();
    let Some(index) = item_at_row(popup, &app.suggestions_scroll, count, mouse.column, mouse.row)
    else {
        return;
    };

    if app.suggestions.store.cursor() != Some(index) {
        app.suggestions.store.select(index as isize);
        app.mark_dirty();
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
