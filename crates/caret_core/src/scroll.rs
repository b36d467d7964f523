//! Viewport scroll math.
//!
//! Fields keep long content readable by translating the glyph/caret
//! sub-tree while the background and clip region stay put. All functions
//! here are pure: they take the current offset plus resolved anchor
//! positions and return the new offset. Non-finite inputs (layout not ready
//! yet) leave the offset unchanged so NaN can never reach a transform.

use crate::selection::SelectionDirection;

/// One-shot jump pulling `pos` inside `[min, max]`.
///
/// Returns the translation delta to apply, 0 when `pos` is already inside
/// the window or is not finite.
///
/// # Examples
///
/// ```
/// use caret_core::jump_delta;
///
/// assert_eq!(jump_delta(5.0, 0.0, 4.0), -1.0);
/// assert_eq!(jump_delta(-2.0, 0.0, 4.0), 2.0);
/// assert_eq!(jump_delta(3.0, 0.0, 4.0), 0.0);
/// assert_eq!(jump_delta(f32::NAN, 0.0, 4.0), 0.0);
/// ```
#[inline]
pub fn jump_delta(pos: f32, min: f32, max: f32) -> f32 {
    if !pos.is_finite() {
        return 0.0;
    }
    if pos > max {
        max - pos
    } else if pos < min {
        min - pos
    } else {
        0.0
    }
}

/// New horizontal offset keeping a concrete caret visible.
///
/// The window is `[0, inner_width]` in resolved (offset-applied) space.
/// `prev_char_w` is the width of the character left of the caret (0 at
/// index 0); it raises the left bound so one character of context stays
/// visible left of the caret.
pub fn scroll_x_for_caret(offset: f32, caret_x: f32, prev_char_w: f32, inner_width: f32) -> f32 {
    let pos = caret_x + offset;
    if !pos.is_finite() {
        return offset;
    }
    let left = if prev_char_w.is_finite() { prev_char_w } else { 0.0 };
    offset + jump_delta(pos, left, inner_width)
}

/// New horizontal offset for a range selection (no concrete caret).
///
/// Scrolls only when the selection overruns the window on the side the
/// native element reports as the active edge: a backward selection reveals
/// its start, a forward one its end. Any other combination leaves the
/// offset alone.
pub fn scroll_x_for_range(
    offset: f32,
    start_x: f32,
    end_x: f32,
    direction: SelectionDirection,
    inner_width: f32,
) -> f32 {
    let resolved_start = start_x + offset;
    let resolved_end = end_x + offset;

    let pos = match direction {
        SelectionDirection::Backward if resolved_start < 0.0 => resolved_start,
        SelectionDirection::Forward if resolved_end > inner_width => resolved_end,
        _ => return offset,
    };
    offset + jump_delta(pos, 0.0, inner_width)
}

/// New vertical offset keeping the caret's row inside an `rows`-row window.
///
/// Anchor space puts row 0 at y = 0 and rows below at negative y, so the
/// window spans `[-(rows - 1) * line_height, 0]`: moving the caret down
/// pushes the content up (negative delta) and vice versa.
pub fn scroll_y_for_caret(offset: f32, anchor_y: f32, rows: u32, line_height: f32) -> f32 {
    let pos = anchor_y + offset;
    if !pos.is_finite() {
        return offset;
    }
    let bottom = -(rows.saturating_sub(1) as f32) * line_height;
    offset + jump_delta(pos, bottom, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_inside_window_leaves_offset_alone() {
        assert_eq!(scroll_x_for_caret(0.0, 0.5, 0.125, 1.0), 0.0);
        assert_eq!(scroll_x_for_caret(-0.25, 0.75, 0.125, 1.0), -0.25);
    }

    #[test]
    fn caret_past_right_edge_jumps_left() {
        // anchors every 0.5, window fits 2 characters
        let offset = scroll_x_for_caret(0.0, 1.5, 0.5, 1.0);
        assert_eq!(offset, -0.5);
    }

    #[test]
    fn caret_past_left_bound_jumps_right() {
        let offset = scroll_x_for_caret(-1.0, 0.5, 0.5, 1.0);
        // resolved pos -0.5 with left bound 0.5 -> shift right by 1.0
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn context_rule_keeps_previous_character_visible() {
        // "abc" at 0.5/character in a window 1.0 wide; caret to the end.
        let anchors = [0.0, 0.5, 1.0, 1.5];
        let offset = scroll_x_for_caret(0.0, anchors[3], anchors[3] - anchors[2], 1.0);
        assert_eq!(offset, -0.5);
        // caret sits on the right edge, the character before it fully visible
        assert_eq!(anchors[3] + offset, 1.0);
        assert!(anchors[2] + offset >= anchors[3] - anchors[2]);
        assert!(anchors[1] + offset >= 0.0);
    }

    #[test]
    fn offset_updates_only_when_caret_leaves_window() {
        let mut offset = 0.0;
        offset = scroll_x_for_caret(offset, 0.25, 0.25, 1.0);
        assert_eq!(offset, 0.0);
        offset = scroll_x_for_caret(offset, 1.5, 0.25, 1.0);
        assert_eq!(offset, -0.5);
        // stepping back inside the window keeps the earlier offset
        offset = scroll_x_for_caret(offset, 1.25, 0.25, 1.0);
        assert_eq!(offset, -0.5);
    }

    #[test]
    fn nan_anchor_skips_the_update() {
        assert_eq!(scroll_x_for_caret(-0.25, f32::NAN, 0.125, 1.0), -0.25);
        assert_eq!(scroll_y_for_caret(0.5, f32::NAN, 4, 0.125), 0.5);
    }

    #[test]
    fn backward_range_reveals_its_start() {
        let offset = scroll_x_for_range(-0.75, 0.25, 1.0, SelectionDirection::Backward, 1.0);
        // resolved start -0.5 -> shifted right so the start edge is visible
        assert_eq!(offset, -0.25);
    }

    #[test]
    fn forward_range_reveals_its_end() {
        let offset = scroll_x_for_range(0.0, 0.25, 1.5, SelectionDirection::Forward, 1.0);
        assert_eq!(offset, -0.5);
    }

    #[test]
    fn range_inside_window_or_wrong_edge_is_ignored() {
        assert_eq!(
            scroll_x_for_range(0.0, 0.25, 0.75, SelectionDirection::Forward, 1.0),
            0.0
        );
        // end overruns but the active edge is the start: no scroll
        assert_eq!(
            scroll_x_for_range(0.0, 0.25, 1.5, SelectionDirection::Backward, 1.0),
            0.0
        );
        assert_eq!(
            scroll_x_for_range(0.0, 0.25, 1.5, SelectionDirection::None, 1.0),
            0.0
        );
    }

    #[test]
    fn caret_below_window_scrolls_content_up() {
        // 4 visible rows, line height 0.25; caret lands on row 5
        let offset = scroll_y_for_caret(0.0, -1.0, 4, 0.25);
        assert_eq!(offset, 0.25);
        assert_eq!(-1.0 + offset, -0.75);
    }

    #[test]
    fn caret_above_window_scrolls_content_down() {
        let offset = scroll_y_for_caret(0.5, -0.25, 4, 0.25);
        // resolved 0.25 above the top bound 0 -> pull back down
        assert_eq!(offset, 0.25);
    }

    #[test]
    fn resolved_caret_stays_inside_window_after_update() {
        let inner = 1.0;
        let anchors: Vec<f32> = (0..12).map(|i| i as f32 * 0.21).collect();
        let mut offset = 0.0;
        for caret in 0..anchors.len() {
            let prev_w = if caret > 0 {
                anchors[caret] - anchors[caret - 1]
            } else {
                0.0
            };
            offset = scroll_x_for_caret(offset, anchors[caret], prev_w, inner);
            let resolved = anchors[caret] + offset;
            assert!(resolved >= 0.0 - 1e-6 && resolved <= inner + 1e-6);
        }
    }
}
