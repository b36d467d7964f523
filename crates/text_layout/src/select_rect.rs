//! Per-line highlight rectangles for a selection range.

use glam::Vec2;

use crate::glyphs::GlyphLayout;

/// Axis-aligned highlight box in the text's local frame.
///
/// Vertically a rect spans one full line: its bottom sits on the line's
/// descender and its top one `line_height` above that. Single-line widgets
/// typically keep only the horizontal extent and pick their own height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl SelectionRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }
}

impl GlyphLayout {
    /// Highlight rects for the characters in `start..end`, one per visual
    /// line the range touches. Empty for a collapsed or out-of-range span.
    /// `end` is clamped to the character count.
    pub fn selection_rects(&self, start: usize, end: usize) -> Vec<SelectionRect> {
        let end = end.min(self.records.len());
        if start >= end {
            return Vec::new();
        }
        let half = self.line_height * 0.5;
        let mut rects = Vec::new();
        let mut run = start;
        for i in start + 1..=end {
            let broke = i == end
                || (self.records[i].baseline_y - self.records[run].baseline_y).abs() >= half;
            if broke {
                rects.push(self.run_rect(run, i));
                run = i;
            }
        }
        rects
    }

    fn run_rect(&self, first: usize, one_past_last: usize) -> SelectionRect {
        let bottom = self.records[first].baseline_y + self.descender;
        SelectionRect {
            left: self.records[first].leading_x,
            right: self.records[one_past_last - 1].trailing_x,
            top: bottom + self.line_height,
            bottom,
        }
    }
}
