//! Tests for LayoutRegions struct

use ratatui::layout::Rect;

use super::layout_regions::{LayoutRegions, Region};

#[test]
fn test_new_creates_empty_regions() {
    let regions = LayoutRegions::new();

    assert!(regions.input_field.is_none());
    assert!(regions.suggestions.is_none());
    assert!(regions.help_line.is_none());
}

#[test]
fn test_clear_resets_all_regions() {
    let mut regions = LayoutRegions::new();
    regions.input_field = Some(Rect::new(0, 0, 80, 3));
    regions.suggestions = Some(Rect::new(0, 3, 80, 5));
    regions.help_line = Some(Rect::new(0, 23, 80, 1));

    regions.clear();

    assert!(regions.input_field.is_none());
    assert!(regions.suggestions.is_none());
    assert!(regions.help_line.is_none());
}

#[test]
fn test_region_is_copy() {
    let region = Region::Suggestions;
    let copied = region;
    assert_eq!(region, copied);
}
