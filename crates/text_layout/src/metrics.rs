//! Raw shaping output as delivered by the host's SDF text engine.
//!
//! The engine reports one record per *character* (newlines included), three
//! floats each: the caret x at the character's leading edge, the caret x at
//! its trailing edge, and the baseline y of the line the character sits on.
//! Baselines grow downward, so the first line is at `0.0` and each following
//! line is one `line_height` lower (more negative).

/// Metrics snapshot for one shaped text run.
///
/// `caret_positions` holds `3 * text.chars().count()` floats. A snapshot is
/// only meaningful for the exact `text` it was shaped from; consumers are
/// expected to discard snapshots whose text no longer matches the live
/// content instead of guessing at anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTextMetrics {
    /// The text the engine shaped. May lag behind the live field content
    /// while the engine is still working.
    pub text: String,
    /// Stride-3 records: `[leading_x, trailing_x, baseline_y]` per character.
    pub caret_positions: Vec<f32>,
    /// Vertical distance between consecutive baselines.
    pub line_height: f32,
    /// Distance from baseline to the top of the tallest glyphs. Positive.
    pub ascender: f32,
    /// Distance from baseline to the lowest descenders. Negative.
    pub descender: f32,
    /// Height of flat capital letters above the baseline.
    pub cap_height: f32,
}

/// Deterministic stand-in for a real text engine.
///
/// Every character advances the pen by the same amount, lines break on `\n`
/// and (optionally) after a fixed column count. Used by tests and headless
/// hosts that need plausible metrics without shaping actual glyphs.
#[derive(Debug, Clone, Copy)]
pub struct FixedPitchShaper {
    pub advance: f32,
    pub line_height: f32,
    pub ascender: f32,
    pub descender: f32,
    pub cap_height: f32,
    /// Hard character wrap after this many columns. `None` never wraps.
    pub wrap_columns: Option<usize>,
}

impl Default for FixedPitchShaper {
    fn default() -> Self {
        FixedPitchShaper {
            advance: 0.05,
            line_height: 0.125,
            ascender: 0.0875,
            descender: -0.025,
            cap_height: 0.0625,
            wrap_columns: None,
        }
    }
}

impl FixedPitchShaper {
    /// Produces a metrics snapshot for `text`.
    ///
    /// A `\n` ends its line: its record carries the position where the line
    /// stopped, and the pen moves to the start of the next line. Column
    /// wrapping moves the breaking character itself onto the new line.
    pub fn shape(&self, text: &str) -> RawTextMetrics {
        let mut caret_positions = Vec::with_capacity(text.chars().count() * 3);
        let mut x = 0.0f32;
        let mut y = 0.0f32;
        let mut column = 0usize;
        for ch in text.chars() {
            if ch == '\n' {
                caret_positions.extend_from_slice(&[x, x, y]);
                x = 0.0;
                y -= self.line_height;
                column = 0;
                continue;
            }
            if let Some(cols) = self.wrap_columns {
                if column >= cols {
                    x = 0.0;
                    y -= self.line_height;
                    column = 0;
                }
            }
            caret_positions.extend_from_slice(&[x, x + self.advance, y]);
            x += self.advance;
            column += 1;
        }
        RawTextMetrics {
            text: text.to_owned(),
            caret_positions,
            line_height: self.line_height,
            ascender: self.ascender,
            descender: self.descender,
            cap_height: self.cap_height,
        }
    }
}
