use super::*;
use crate::suggestions::BoundField;
use crate::test_utils::test_helpers::{gated_app, test_app};
use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Modifier;

fn render_field_buffer(app: &mut App, width: u16) -> Buffer {
    let backend = TestBackend::new(width, 3);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render_field(app, f, f.area())).unwrap();
    terminal.backend().buffer().clone()
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_empty_focused_field_shows_placeholder() {
    let mut app = test_app();

    let buffer = render_field_buffer(&mut app, 50);

    assert!(row(&buffer, 1).contains(PLACEHOLDER));
    assert_eq!(buffer[(0, 0)].fg, theme::input::BORDER_FOCUSED);
    // Cursor sits on the first cell
    assert_eq!(buffer[(1, 1)].symbol(), " ");
    assert!(buffer[(1, 1)].modifier.contains(Modifier::REVERSED));
}

#[test]
fn test_text_is_rendered_inside_border() {
    let mut app = test_app();
    app.input.set_value("apple");

    let buffer = render_field_buffer(&mut app, 30);

    assert_eq!(row(&buffer, 1).trim_matches('│').trim_end(), "apple");
    assert!(row(&buffer, 0).contains(" Input "));
}

#[test]
fn test_unfocused_field_uses_dim_border() {
    let mut app = test_app();
    app.input.set_value("apple");
    app.input.blur();

    let buffer = render_field_buffer(&mut app, 30);

    assert_eq!(buffer[(0, 0)].fg, theme::input::BORDER_UNFOCUSED);
    assert_eq!(buffer[(1, 1)].fg, theme::input::TEXT_UNFOCUSED);
}

#[test]
fn test_long_text_scrolls_to_cursor() {
    let mut app = test_app();
    app.input.set_value("abcdefghijklmnop");

    let buffer = render_field_buffer(&mut app, 10);

    // 8 visible columns; cursor cell after 'p' is the last one
    assert_eq!(app.input.scroll_offset, 9);
    assert_snapshot!(row(&buffer, 1), @"│jklmnop │");
}

#[test]
fn test_pending_load_shows_searching_hint() {
    let (mut app, _handle) = gated_app();
    app.suggestions.load("a").unwrap();

    let buffer = render_field_buffer(&mut app, 40);

    assert!(row(&buffer, 0).contains("searching…"));
}

#[test]
fn test_visible_line_without_cursor() {
    let line = visible_line("hello world", 6, 5, None, Style::default());
    assert_eq!(line.to_string(), "world");
}

#[test]
fn test_visible_line_cursor_past_end_adds_cell() {
    let line = visible_line("abc", 0, 10, Some(3), Style::default());
    assert_eq!(line.to_string(), "abc ");
    assert_eq!(line.spans[1].style, theme::input::CURSOR);
}
