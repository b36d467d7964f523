//! Standalone text label.

use glam::Vec2;
use text_layout::RawTextMetrics;

use crate::color::Color;
use crate::scene::{GlyphRun, TextAnchorX, TextAnchorY, Transform};

/// Label configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelProps {
    pub text: String,
    pub font_size: f32,
    /// Font resource passed through to the SDF engine.
    pub font: Option<String>,
    pub color: Color,
    pub anchor_x: TextAnchorX,
    pub anchor_y: TextAnchorY,
    /// Wrap width; `None` keeps the text on one line.
    pub max_width: Option<f32>,
    pub transform: Transform,
}

impl Default for LabelProps {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 0.07,
            font: None,
            color: Color::BLACK,
            anchor_x: TextAnchorX::Center,
            anchor_y: TextAnchorY::BottomBaseline,
            max_width: None,
            transform: Transform::default(),
        }
    }
}

/// Visual description of a [`Label`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelVisual {
    pub transform: Transform,
    pub glyphs: GlyphRun,
}

/// Floating text that lifts itself above its anchor point once real line
/// metrics arrive, keeping it clear of whatever it annotates.
pub struct Label {
    props: LabelProps,
    offset_y: f32,
}

impl Label {
    pub fn new(props: LabelProps) -> Label {
        Label {
            props,
            offset_y: 0.0,
        }
    }

    pub fn props(&self) -> &LabelProps {
        &self.props
    }

    pub fn set_props(&mut self, props: LabelProps) {
        self.props = props;
    }

    /// Adopt shaped metrics; the label rises by 1.2 line heights.
    pub fn sync_layout(&mut self, metrics: &RawTextMetrics) {
        if metrics.line_height.is_finite() {
            self.offset_y = metrics.line_height * 1.2;
        }
    }

    /// Resolve this frame's drawable description.
    pub fn visual(&self) -> LabelVisual {
        let mut run = GlyphRun::new(
            self.props.text.clone(),
            Vec2::new(0.0, self.offset_y),
            self.props.font_size,
            self.props.color,
        );
        run.font = self.props.font.clone();
        run.anchor_x = self.props.anchor_x;
        run.anchor_y = self.props.anchor_y;
        run.max_width = self.props.max_width;
        LabelVisual {
            transform: self.props.transform,
            glyphs: run,
        }
    }
}
