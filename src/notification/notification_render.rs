//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 1;
const HEIGHT: u16 = 3;

/// Render the notification overlay in the bottom-right corner of the frame
///
/// Call after the rest of the UI so the toast draws on top. Leaves the last
/// row free for the help line.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let frame_area = frame.area();
    // 1 padding space each side + 2 borders
    let wanted_width = notif.message.width() as u16 + 4;
    let width = wanted_width.min(frame_area.width.saturating_sub(MARGIN * 2));
    let bottom = frame_area.bottom().saturating_sub(1 + MARGIN);

    let area = Rect {
        x: frame_area.right().saturating_sub(width + MARGIN),
        y: bottom.saturating_sub(HEIGHT),
        width,
        height: HEIGHT.min(bottom.saturating_sub(frame_area.y)),
    };

    if area.width < 5 || area.height < HEIGHT {
        return;
    }

    popup::clear_area(frame, area);

    let style = &notif.style;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
