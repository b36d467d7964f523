//! Caret anchor tables derived from engine metrics.
//!
//! A [`GlyphLayout`] turns one [`RawTextMetrics`] snapshot into the lookup
//! structure the widgets work with: for text of `n` characters there are
//! `n + 1` caret anchors, one before each character plus one past the end.
//! Anchors live in the text's local frame: x grows rightward from the line
//! start, y is the baseline of the anchor's line (`0.0` on the first line,
//! one `line_height` lower per following line).

use glam::Vec2;

use crate::metrics::RawTextMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayoutKind {
    SingleLine,
    MultiLine,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CaretRecord {
    pub(crate) ch: char,
    pub(crate) leading_x: f32,
    pub(crate) trailing_x: f32,
    pub(crate) baseline_y: f32,
}

/// One visual line: a run of consecutive characters sharing a baseline.
#[derive(Debug, Clone, Copy)]
struct Row {
    baseline_y: f32,
    first: usize,
    len: usize,
}

/// Caret anchor table for one shaped text snapshot.
///
/// The table is immutable; when the content changes the host engine shapes
/// again and a fresh layout replaces this one. Until that happens consumers
/// must treat a layout whose character count disagrees with the live content
/// as stale (see [`GlyphLayout::is_stale`]).
#[derive(Debug, Clone)]
pub struct GlyphLayout {
    kind: LayoutKind,
    pub(crate) records: Vec<CaretRecord>,
    rows: Vec<Row>,
    trailing: Vec2,
    pub(crate) line_height: f32,
    ascender: f32,
    pub(crate) descender: f32,
    cap_height: f32,
}

impl GlyphLayout {
    /// Builds a table for a single-line field. All anchors sit at `y == 0`.
    ///
    /// Returns `None` when the record count does not match the shaped text,
    /// which happens while the engine is still re-shaping after an edit.
    pub fn single_line(raw: &RawTextMetrics) -> Option<GlyphLayout> {
        Self::build(raw, LayoutKind::SingleLine)
    }

    /// Builds a table for a wrapped multi-line field. Anchor y values carry
    /// the baseline of the line each anchor sits on.
    pub fn multi_line(raw: &RawTextMetrics) -> Option<GlyphLayout> {
        Self::build(raw, LayoutKind::MultiLine)
    }

    fn build(raw: &RawTextMetrics, kind: LayoutKind) -> Option<GlyphLayout> {
        let char_count = raw.text.chars().count();
        if raw.caret_positions.len() != char_count * 3 {
            return None;
        }
        let flat = kind == LayoutKind::SingleLine;
        let mut records = Vec::with_capacity(char_count);
        for (i, ch) in raw.text.chars().enumerate() {
            records.push(CaretRecord {
                ch,
                leading_x: raw.caret_positions[i * 3],
                trailing_x: raw.caret_positions[i * 3 + 1],
                baseline_y: if flat { 0.0 } else { raw.caret_positions[i * 3 + 2] },
            });
        }

        // The anchor past the last character. A trailing newline puts it at
        // the start of the (empty) next line; otherwise it hugs the right
        // edge of the last character.
        let trailing = match records.last() {
            None => Vec2::ZERO,
            Some(last) if last.ch == '\n' => {
                let y = if flat { 0.0 } else { last.baseline_y - raw.line_height };
                Vec2::new(0.0, y)
            }
            Some(last) => Vec2::new(last.trailing_x, last.baseline_y),
        };

        let half = raw.line_height * 0.5;
        let mut rows: Vec<Row> = Vec::new();
        for (i, rec) in records.iter().enumerate() {
            match rows.last_mut() {
                Some(row) if (rec.baseline_y - row.baseline_y).abs() < half => row.len += 1,
                _ => rows.push(Row { baseline_y: rec.baseline_y, first: i, len: 1 }),
            }
        }
        if rows.is_empty() {
            rows.push(Row { baseline_y: 0.0, first: 0, len: 0 });
        } else if records.last().is_some_and(|r| r.ch == '\n') && !flat {
            // The empty line opened by a trailing newline is a click target.
            rows.push(Row { baseline_y: trailing.y, first: records.len(), len: 0 });
        }

        Some(GlyphLayout {
            kind,
            records,
            rows,
            trailing,
            line_height: raw.line_height,
            ascender: raw.ascender,
            descender: raw.descender,
            cap_height: raw.cap_height,
        })
    }

    /// Number of characters the table was built from.
    pub fn char_count(&self) -> usize {
        self.records.len()
    }

    /// Number of caret anchors, always `char_count() + 1`.
    pub fn anchor_count(&self) -> usize {
        self.records.len() + 1
    }

    /// Number of visual lines. At least 1, even for empty text.
    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn ascender(&self) -> f32 {
        self.ascender
    }

    /// Distance from baseline to the lowest descenders. Negative.
    pub fn descender(&self) -> f32 {
        self.descender
    }

    pub fn cap_height(&self) -> f32 {
        self.cap_height
    }

    /// True when this table no longer matches the live field content and
    /// must not be used for caret geometry.
    pub fn is_stale(&self, content: &str) -> bool {
        content.chars().count() != self.records.len()
    }

    /// Caret anchor for `index`, clamped to the table. Index `char_count()`
    /// (and anything beyond) yields the trailing anchor; an empty table
    /// yields the origin.
    pub fn anchor(&self, index: usize) -> Vec2 {
        match self.records.get(index) {
            Some(rec) => Vec2::new(rec.leading_x, rec.baseline_y),
            None => self.trailing,
        }
    }

    /// Width of the character just before `index`, used to widen the reveal
    /// window so the caret keeps one character of context while scrolling.
    pub fn prev_advance(&self, index: usize) -> f32 {
        if index == 0 {
            return 0.0;
        }
        self.anchor(index).x - self.anchor(index - 1).x
    }

    /// Caret index closest to `point`, in the same frame the anchors use.
    ///
    /// The line is chosen by y (clamped to the first/last line), then the
    /// nearest caret boundary on that line by x. Clicking past the end of a
    /// hard-broken line lands before its newline, matching how native text
    /// fields place the caret.
    pub fn caret_at_point(&self, point: Vec2) -> usize {
        if self.records.is_empty() {
            return 0;
        }
        let half = self.line_height * 0.5;
        let row_idx = self
            .rows
            .partition_point(|row| point.y < row.baseline_y - half)
            .min(self.rows.len() - 1);
        let row = self.rows[row_idx];
        if row.len == 0 {
            return row.first;
        }

        let chars = &self.records[row.first..row.first + row.len];
        let mut boundaries: Vec<(f32, usize)> = chars
            .iter()
            .enumerate()
            .map(|(k, rec)| (rec.leading_x, row.first + k))
            .collect();
        let last = chars[row.len - 1];
        if last.ch != '\n' {
            boundaries.push((last.trailing_x, row.first + row.len));
        }

        let i = boundaries.partition_point(|&(x, _)| x < point.x);
        if i == 0 {
            return boundaries[0].1;
        }
        if i == boundaries.len() {
            return boundaries[i - 1].1;
        }
        let (left_x, left_index) = boundaries[i - 1];
        let (right_x, right_index) = boundaries[i];
        if point.x - left_x > right_x - point.x {
            right_index
        } else {
            left_index
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FixedPitchShaper;

    fn shaper() -> FixedPitchShaper {
        FixedPitchShaper {
            advance: 0.5,
            line_height: 1.0,
            ascender: 0.75,
            descender: -0.25,
            cap_height: 0.5,
            wrap_columns: None,
        }
    }

    fn single(text: &str) -> GlyphLayout {
        GlyphLayout::single_line(&shaper().shape(text)).unwrap()
    }

    fn multi(text: &str) -> GlyphLayout {
        GlyphLayout::multi_line(&shaper().shape(text)).unwrap()
    }

    #[test]
    fn table_has_one_more_anchor_than_chars() {
        let layout = single("hello");
        assert_eq!(layout.char_count(), 5);
        assert_eq!(layout.anchor_count(), 6);
        for i in 0..5 {
            assert_eq!(layout.anchor(i), Vec2::new(i as f32 * 0.5, 0.0));
        }
        assert_eq!(layout.anchor(5), Vec2::new(2.5, 0.0));
    }

    #[test]
    fn build_rejects_record_count_mismatch() {
        let mut raw = shaper().shape("abc");
        raw.caret_positions.truncate(7);
        assert!(GlyphLayout::single_line(&raw).is_none());
        assert!(GlyphLayout::multi_line(&raw).is_none());
    }

    #[test]
    fn empty_text_has_a_single_origin_anchor() {
        let layout = multi("");
        assert_eq!(layout.anchor_count(), 1);
        assert_eq!(layout.anchor(0), Vec2::ZERO);
        assert_eq!(layout.anchor(7), Vec2::ZERO);
        assert_eq!(layout.line_count(), 1);
    }

    #[test]
    fn anchor_clamps_past_the_end() {
        let layout = single("ab");
        assert_eq!(layout.anchor(99), layout.anchor(2));
    }

    #[test]
    fn multi_line_anchors_drop_by_line_height() {
        let layout = multi("line1\nline2");
        assert_eq!(layout.anchor_count(), 12);
        assert_eq!(layout.anchor(0), Vec2::new(0.0, 0.0));
        assert_eq!(layout.anchor(6), Vec2::new(0.0, -1.0));
        assert_eq!(layout.anchor(11), Vec2::new(2.5, -1.0));
        assert_eq!(layout.line_count(), 2);
    }

    #[test]
    fn trailing_newline_opens_a_new_line() {
        let layout = multi("line1\n");
        assert_eq!(layout.anchor_count(), 7);
        assert_eq!(layout.anchor(6), Vec2::new(0.0, -1.0));
        assert_eq!(layout.line_count(), 2);
    }

    #[test]
    fn single_line_ignores_baselines() {
        let layout = single("abc");
        for i in 0..=3 {
            assert_eq!(layout.anchor(i).y, 0.0);
        }
    }

    #[test]
    fn staleness_tracks_character_count_not_bytes() {
        let layout = single("héllo");
        assert!(!layout.is_stale("héllo"));
        assert!(!layout.is_stale("world"));
        assert!(layout.is_stale("hi"));
    }

    #[test]
    fn prev_advance_is_zero_at_the_start() {
        let layout = single("ab");
        assert_eq!(layout.prev_advance(0), 0.0);
        assert_eq!(layout.prev_advance(1), 0.5);
        assert_eq!(layout.prev_advance(2), 0.5);
    }

    #[test]
    fn caret_at_point_round_trips_every_anchor() {
        for layout in [multi("line1\nline2"), multi("ab\ncd\n"), single("hello")] {
            for i in 0..layout.anchor_count() {
                assert_eq!(layout.caret_at_point(layout.anchor(i)), i, "anchor {i}");
            }
        }
    }

    #[test]
    fn caret_at_point_round_trips_wrapped_text() {
        let raw = FixedPitchShaper { wrap_columns: Some(3), ..shaper() }.shape("abcdef");
        let layout = GlyphLayout::multi_line(&raw).unwrap();
        assert_eq!(layout.line_count(), 2);
        for i in 0..layout.anchor_count() {
            assert_eq!(layout.caret_at_point(layout.anchor(i)), i, "anchor {i}");
        }
    }

    #[test]
    fn caret_snaps_to_the_nearest_boundary() {
        let layout = single("ab");
        assert_eq!(layout.caret_at_point(Vec2::new(0.2, 0.0)), 0);
        assert_eq!(layout.caret_at_point(Vec2::new(0.3, 0.0)), 1);
        assert_eq!(layout.caret_at_point(Vec2::new(-5.0, 0.0)), 0);
        assert_eq!(layout.caret_at_point(Vec2::new(5.0, 0.0)), 2);
    }

    #[test]
    fn click_past_a_hard_break_lands_before_the_newline() {
        let layout = multi("ab\ncd");
        assert_eq!(layout.caret_at_point(Vec2::new(9.0, 0.0)), 2);
        assert_eq!(layout.caret_at_point(Vec2::new(9.0, -1.0)), 5);
    }

    #[test]
    fn click_on_the_line_opened_by_a_trailing_newline() {
        let layout = multi("ab\n");
        assert_eq!(layout.caret_at_point(Vec2::new(9.0, -1.0)), 3);
        assert_eq!(layout.caret_at_point(Vec2::new(0.0, -42.0)), 3);
    }

    #[test]
    fn click_rows_clamp_vertically() {
        let layout = multi("ab\ncd");
        assert_eq!(layout.caret_at_point(Vec2::new(0.0, 50.0)), 0);
        assert_eq!(layout.caret_at_point(Vec2::new(0.0, -50.0)), 3);
    }
}
