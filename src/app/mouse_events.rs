//! Mouse event dispatcher
//!
//! Routes mouse events to appropriate handlers based on position.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use super::mouse_click;
use super::mouse_hover;
use super::mouse_scroll::{self, ScrollDirection};
use crate::layout::region_at;

/// Handle mouse events by routing to appropriate handlers
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            mouse_click::handle_click(app, region, mouse);
        }
        MouseEventKind::Moved => {
            mouse_hover::handle_hover(app, region, mouse);
        }
        MouseEventKind::ScrollDown => {
            mouse_scroll::handle_scroll(app, region, ScrollDirection::Down);
        }
        MouseEventKind::ScrollUp => {
            mouse_scroll::handle_scroll(app, region, ScrollDirection::Up);
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
