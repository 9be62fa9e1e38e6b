use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, clamped to the bottom of `frame_area`
pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let frame_bottom = frame_area.y.saturating_add(frame_area.height);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: height.min(frame_bottom.saturating_sub(popup_y)),
    }
}

/// Box in the top-right corner of `frame_area`, `margin` cells from the edges
pub fn top_right_popup(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    Rect {
        x: frame_area.width.saturating_sub(width + margin),
        y: margin,
        width: width.min(frame_area.width.saturating_sub(margin * 2)),
        height: height.min(frame_area.height.saturating_sub(margin * 2)),
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
        let frame = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(0, 0, 80, 3);

        let popup = popup_below_anchor(anchor, frame, 10);

        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 3);
        assert_eq!(popup.width, 80);
        assert_eq!(popup.height, 10);
    }

    #[test]
    fn test_popup_below_anchor_clamped_to_frame() {
        let frame = Rect::new(0, 0, 80, 8);
        let anchor = Rect::new(0, 0, 80, 3);

        let popup = popup_below_anchor(anchor, frame, 10);

        assert_eq!(popup.y, 3);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_popup_below_anchor_no_room() {
        let frame = Rect::new(0, 0, 80, 3);
        let anchor = Rect::new(0, 0, 80, 3);

        let popup = popup_below_anchor(anchor, frame, 10);

        assert_eq!(popup.height, 0);
    }

    #[test]
    fn test_top_right_popup_position() {
        let frame = Rect::new(0, 0, 100, 30);

        let popup = top_right_popup(frame, 20, 3, 2);

        assert_eq!(popup.x, 78);
        assert_eq!(popup.y, 2);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 3);
    }

    #[test]
    fn test_top_right_popup_too_wide_is_clamped() {
        let frame = Rect::new(0, 0, 20, 10);

        let popup = top_right_popup(frame, 40, 3, 2);

        assert_eq!(popup.x, 0);
        assert_eq!(popup.width, 16);
    }
}
