//! Scrollbar for windowed lists

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::scroll::ScrollState;

/// Draw a thumb on the right border of `area` for the window in `scroll`
///
/// Nothing is drawn while every row fits in the window.
pub fn render_scrollbar(frame: &mut Frame, area: Rect, scroll: &ScrollState, style: Style) {
    if scroll.max_offset == 0 || scroll.viewport_height == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(style)
        .track_style(style);

    // One position per reachable offset, so the thumb touches the bottom
    // exactly when the last row is on screen
    let mut state = ScrollbarState::new(scroll.max_offset + 1)
        .position(scroll.offset.min(scroll.max_offset))
        .viewport_content_length(scroll.viewport_height);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
