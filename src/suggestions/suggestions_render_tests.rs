use super::*;
use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn store_with(items: &[&str]) -> SuggestionStore {
    let mut store = SuggestionStore::default();
    let token = store.begin_load();
    store.apply_load(token, items.iter().map(|s| s.to_string()).collect());
    store
}

fn numbered(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item{:02}", i)).collect()
}

/// Render and return the popup rect plus the buffer
fn render(
    store: &SuggestionStore,
    scroll: &mut ScrollState,
    max_visible: usize,
    size: (u16, u16),
    input_area: Rect,
) -> (Option<Rect>, Buffer) {
    let mut terminal = create_test_terminal(size.0, size.1);
    let mut popup_rect = None;
    terminal
        .draw(|f| {
            popup_rect = render_popup(store, scroll, max_visible, f, f.area(), input_area);
        })
        .unwrap();
    (popup_rect, terminal.backend().buffer().clone())
}

/// Text of each list row inside the popup, trimmed
fn row_texts(buffer: &Buffer, popup: Rect) -> Vec<String> {
    (popup.y + 1..popup.y + popup.height - 1)
        .map(|y| {
            (popup.x + 1..popup.x + popup.width - 1)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
                .trim()
                .to_string()
        })
        .collect()
}

fn line_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_hidden_store_renders_nothing() {
    let store = SuggestionStore::default();
    let mut scroll = ScrollState::new();

    let (rect, buffer) = render(&store, &mut scroll, 10, (30, 10), Rect::new(0, 0, 30, 3));

    assert_eq!(rect, None);
    assert_eq!(line_text(&buffer, 3).trim(), "");
}

#[test]
fn test_popup_sits_below_input_with_same_width() {
    let store = store_with(&["Item1", "Item2", "Item3"]);
    let mut scroll = ScrollState::new();
    let input = Rect::new(2, 0, 26, 3);

    let (rect, _) = render(&store, &mut scroll, 10, (30, 12), input);

    assert_eq!(rect, Some(Rect::new(2, 3, 26, 5)));
}

#[test]
fn test_renders_one_row_per_candidate_without_selection() {
    let store = store_with(&["Item1", "Item2", "Item3"]);
    let mut scroll = ScrollState::new();

    let (rect, buffer) = render(&store, &mut scroll, 10, (30, 12), Rect::new(0, 0, 30, 3));
    let rows = row_texts(&buffer, rect.unwrap());

    assert_snapshot!(rows.join(" | "), @"Item1 | Item2 | Item3");
}

#[test]
fn test_selected_row_is_marked() {
    let mut store = store_with(&["Item1", "Item2", "Item3"]);
    store.select(1);
    let mut scroll = ScrollState::new();

    let (rect, buffer) = render(&store, &mut scroll, 10, (30, 12), Rect::new(0, 0, 30, 3));
    let rows = row_texts(&buffer, rect.unwrap());

    assert_snapshot!(rows.join(" | "), @"Item1 | ► Item2 | Item3");
}

#[test]
fn test_only_selected_row_uses_selected_style() {
    let mut store = store_with(&["Item1", "Item2", "Item3"]);
    store.select(1);
    let mut scroll = ScrollState::new();

    let (rect, buffer) = render(&store, &mut scroll, 10, (30, 12), Rect::new(0, 0, 30, 3));
    let rect = rect.unwrap();

    for (row, y) in (rect.y + 1..rect.y + 4).enumerate() {
        let cell = &buffer[(rect.x + 3, y)];
        if row == 1 {
            assert_eq!(cell.bg, theme::palette::BG_HIGHLIGHT);
        } else {
            assert_eq!(cell.bg, theme::palette::BG_DARK);
        }
    }
}

#[test]
fn test_title_and_count_are_drawn() {
    let store = store_with(&["Item1", "Item2", "Item3"]);
    let mut scroll = ScrollState::new();

    let (rect, buffer) = render(&store, &mut scroll, 10, (30, 12), Rect::new(0, 0, 30, 3));
    let rect = rect.unwrap();

    assert!(line_text(&buffer, rect.y).contains(" Suggestions "));
    assert!(line_text(&buffer, rect.y + rect.height - 1).contains(" 3 "));
}

#[test]
fn test_long_list_is_capped_and_follows_cursor() {
    let names = numbered(20);
    let mut store = SuggestionStore::default();
    let token = store.begin_load();
    store.apply_load(token, names);
    store.select(12);
    let mut scroll = ScrollState::new();

    let (rect, buffer) = render(&store, &mut scroll, 5, (30, 20), Rect::new(0, 0, 30, 3));
    let rect = rect.unwrap();

    assert_eq!(rect.height, 7);
    assert_eq!(scroll.offset, 8);
    let rows = row_texts(&buffer, rect);
    assert_eq!(rows.first().map(String::as_str), Some("item08"));
    assert!(rows.last().unwrap().starts_with("► item12"));
}

#[test]
fn test_popup_flips_above_input_at_bottom_of_screen() {
    let store = store_with(&["Item1", "Item2"]);
    let mut scroll = ScrollState::new();

    let (rect, _) = render(&store, &mut scroll, 10, (30, 12), Rect::new(0, 9, 30, 3));

    assert_eq!(rect, Some(Rect::new(0, 5, 30, 4)));
}

#[test]
fn test_long_candidate_is_truncated_with_ellipsis() {
    let store = store_with(&["a-very-long-candidate-name"]);
    let mut scroll = ScrollState::new();

    let (rect, buffer) = render(&store, &mut scroll, 10, (14, 8), Rect::new(0, 0, 14, 3));
    let rows = row_texts(&buffer, rect.unwrap());

    assert_eq!(rows, vec!["a-very-lo…"]);
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("short", 10), "short");
    assert_eq!(truncate_to_width("exactly", 7), "exactly");
    assert_eq!(truncate_to_width("toolong", 5), "tool…");
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn test_item_at_row_maps_rows_to_indices() {
    let popup = Rect::new(0, 3, 30, 5);
    let mut scroll = ScrollState::new();
    scroll.update_bounds(3, 3);

    assert_eq!(item_at_row(popup, &scroll, 3, 5, 4), Some(0));
    assert_eq!(item_at_row(popup, &scroll, 3, 5, 6), Some(2));
    // Borders
    assert_eq!(item_at_row(popup, &scroll, 3, 5, 3), None);
    assert_eq!(item_at_row(popup, &scroll, 3, 0, 4), None);
    assert_eq!(item_at_row(popup, &scroll, 3, 5, 7), None);
}

#[test]
fn test_item_at_row_accounts_for_scroll_offset() {
    let popup = Rect::new(0, 3, 30, 7);
    let mut scroll = ScrollState::new();
    scroll.update_bounds(20, 5);
    scroll.offset = 8;

    assert_eq!(item_at_row(popup, &scroll, 20, 5, 4), Some(8));
}
