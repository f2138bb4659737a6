use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::suggestion_store::SuggestionStore;
use crate::scroll::ScrollState;
use crate::theme;
use crate::widgets::{popup, scrollbar};

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_BORDER_WIDTH: usize = 2;
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";
const ELLIPSIS: char = '…';

/// Render the suggestion list below `input_area`, staying inside `bounds`
///
/// Returns the popup rectangle, or `None` when nothing was drawn.
pub fn render_popup(
    store: &SuggestionStore,
    scroll: &mut ScrollState,
    max_visible: usize,
    frame: &mut Frame,
    bounds: Rect,
    input_area: Rect,
) -> Option<Rect> {
    let items = store.items();
    if !store.is_visible() || items.is_empty() || max_visible == 0 {
        return None;
    }

    let wanted_rows = items.len().min(max_visible);
    let popup_area =
        popup::popup_below_anchor(input_area, bounds, wanted_rows as u16 + POPUP_BORDER_HEIGHT);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let visible_rows = (popup_area.height - POPUP_BORDER_HEIGHT) as usize;
    scroll.update_bounds(items.len(), visible_rows);
    if let Some(cursor) = store.cursor() {
        scroll.ensure_visible(cursor);
    }

    let text_width = (popup_area.width as usize)
        .saturating_sub(POPUP_BORDER_WIDTH + SELECTED_MARKER.width());

    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .skip(scroll.offset)
        .take(visible_rows)
        .map(|(i, item)| {
            let text = truncate_to_width(item, text_width);
            let padding = " ".repeat(text_width.saturating_sub(text.width()));
            let line = if store.cursor() == Some(i) {
                Line::from(vec![
                    Span::styled(
                        SELECTED_MARKER,
                        theme::suggestions::ITEM_SELECTED
                            .fg(theme::suggestions::SELECTED_INDICATOR),
                    ),
                    Span::styled(
                        format!("{}{}", text, padding),
                        theme::suggestions::ITEM_SELECTED,
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("{}{}{}", UNSELECTED_MARKER, text, padding),
                    theme::suggestions::ITEM,
                ))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let count = Line::from(Span::styled(
        format!(" {} ", items.len()),
        Style::default().fg(theme::suggestions::COUNT),
    ));

    let list = List::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .title_bottom(count.right_aligned())
            .border_style(Style::default().fg(theme::suggestions::BORDER))
            .style(Style::default().bg(theme::suggestions::BACKGROUND)),
    );

    frame.render_widget(list, popup_area);

    scrollbar::render_scrollbar(
        frame,
        popup_area,
        scroll,
        Style::default().fg(theme::suggestions::BORDER),
    );

    Some(popup_area)
}

/// Map a screen row inside the popup to a candidate index
pub fn item_at_row(
    popup_area: Rect,
    scroll: &ScrollState,
    item_count: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let inner_x = popup_area.x.saturating_add(1);
    let inner_y = popup_area.y.saturating_add(1);
    let inner_width = popup_area.width.saturating_sub(2);
    let inner_height = popup_area.height.saturating_sub(2);

    if column < inner_x
        || column >= inner_x.saturating_add(inner_width)
        || row < inner_y
        || row >= inner_y.saturating_add(inner_height)
    {
        return None;
    }

    scroll.index_at_row((row - inner_y) as usize, item_count)
}

/// Cut `text` to at most `max_width` columns, marking the cut with an ellipsis
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
#[path = "suggestions_render_tests.rs"]
mod suggestions_render_tests;
