use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::theme;

const PLACEHOLDER: &str = "Start typing, or press ↓ to browse";

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let viewport_width = area.width.saturating_sub(2) as usize;
    app.input.calculate_scroll_offset(viewport_width);

    let focused = app.input.focused;
    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Input ")
        .border_style(Style::default().fg(border_color));

    if let Some(hint) = status_hint(app) {
        block = block.title_top(
            Line::from(Span::styled(
                hint,
                Style::default().fg(theme::input::LOADING_HINT),
            ))
            .alignment(Alignment::Right),
        );
    }

    let query = app.query();
    let cursor_col = app.input.textarea.cursor().1;

    let line = if query.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled(" ", theme::input::CURSOR));
        }
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme::input::PLACEHOLDER),
        ));
        Line::from(spans)
    } else {
        let text_color = if focused {
            theme::input::TEXT
        } else {
            theme::input::TEXT_UNFOCUSED
        };
        let cursor = focused.then(|| cursor_col.saturating_sub(app.input.scroll_offset));
        visible_line(
            query,
            app.input.scroll_offset,
            viewport_width,
            cursor,
            Style::default().fg(text_color),
        )
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn status_hint(app: &App) -> Option<&'static str> {
    if app.is_loading_words() {
        Some(" loading words… ")
    } else if app.suggestions.is_pending() {
        Some(" searching… ")
    } else {
        None
    }
}

/// Slice `text` to the viewport and paint the cursor cell
fn visible_line(
    text: &str,
    scroll_offset: usize,
    viewport_width: usize,
    cursor: Option<usize>,
    style: Style,
) -> Line<'static> {
    let visible: Vec<char> = text
        .chars()
        .skip(scroll_offset)
        .take(viewport_width)
        .collect();

    let Some(cursor) = cursor else {
        return Line::from(Span::styled(visible.into_iter().collect::<String>(), style));
    };

    let before: String = visible.iter().take(cursor).collect();
    let at: String = visible.get(cursor).map_or(' '.to_string(), |c| c.to_string());
    let after: String = visible.iter().skip(cursor + 1).collect();

    Line::from(vec![
        Span::styled(before, style),
        Span::styled(at, theme::input::CURSOR),
        Span::styled(after, style),
    ])
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
