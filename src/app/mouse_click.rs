//! Mouse click handling
//!
//! A click on a suggestion commits it; a click anywhere outside both the
//! input field and the popup closes the list.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;
use crate::suggestions::BoundField;
use crate::suggestions::suggestions_render::item_at_row;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Suggestions) => click_suggestions(app, mouse),
        Some(Region::InputField) => click_input_field(app, mouse),
        Some(Region::HelpLine) | None => app.blur(),
    }
}

fn click_suggestions(app: &mut App, mouse: MouseEvent) {
    let Some(popup) = app.layout_regions.suggestions else {
        return;
    };

    let count = app.suggestions.store.items().len();
    let Some(index) = item_at_row(popup, &app.suggestions_scroll, count, mouse.column, mouse.row)
    else {
        // Border click keeps the list open
        return;
    };

    app.suggestions.store.select(index as isize);
    if let Some(value) = app.suggestions.commit(&mut app.input) {
        log::debug!("Clicked suggestion {:?}", value);
    }
    app.mark_dirty();
}

fn click_input_field(app: &mut App, mouse: MouseEvent) {
    app.input.focus();

    if let Some(input_rect) = app.layout_regions.input_field {
        let inner_x = input_rect.x.saturating_add(1);
        if mouse.column >= inner_x {
            let column = (mouse.column - inner_x) as usize + app.input.scroll_offset;
            app.input.set_cursor_column(column);
        }
    }
    app.mark_dirty();
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
