use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly below `anchor`, sharing its x offset and width
///
/// Falls back to above the anchor when `bounds` leaves more room there.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, height: u16) -> Rect {
    let below_y = anchor.y.saturating_add(anchor.height);
    let space_below = bounds.bottom().saturating_sub(below_y);
    let space_above = anchor.y.saturating_sub(bounds.y);

    if space_below < height && space_above > space_below {
        let popup_height = height.min(space_above);
        return Rect {
            x: anchor.x,
            y: anchor.y - popup_height,
            width: anchor.width,
            height: popup_height,
        };
    }

    Rect {
        x: anchor.x,
        y: below_y,
        width: anchor.width,
        height: height.min(space_below),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_below_anchor_basic() {
        let anchor = Rect::new(4, 2, 40, 3);
        let bounds = Rect::new(0, 0, 80, 24);

        let popup = popup_below_anchor(anchor, bounds, 5);

        assert_eq!(popup, Rect::new(4, 5, 40, 5));
    }

    #[test]
    fn test_popup_below_anchor_matches_anchor_width_and_offset() {
        let anchor = Rect::new(10, 0, 25, 3);
        let bounds = Rect::new(0, 0, 100, 50);

        let popup = popup_below_anchor(anchor, bounds, 12);

        assert_eq!(popup.x, anchor.x);
        assert_eq!(popup.width, anchor.width);
    }

    #[test]
    fn test_popup_below_anchor_truncates_to_bounds() {
        let anchor = Rect::new(0, 0, 30, 3);
        let bounds = Rect::new(0, 0, 30, 8);

        let popup = popup_below_anchor(anchor, bounds, 12);

        assert_eq!(popup.y, 3);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_popup_flips_above_when_no_room_below() {
        let anchor = Rect::new(0, 20, 30, 3);
        let bounds = Rect::new(0, 0, 30, 24);

        let popup = popup_below_anchor(anchor, bounds, 6);

        assert_eq!(popup, Rect::new(0, 14, 30, 6));
    }

    #[test]
    fn test_popup_above_is_clamped_to_available_space() {
        let anchor = Rect::new(0, 4, 30, 3);
        let bounds = Rect::new(0, 0, 30, 8);

        let popup = popup_below_anchor(anchor, bounds, 10);

        assert_eq!(popup, Rect::new(0, 0, 30, 4));
    }
}
