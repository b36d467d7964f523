//! Scene-graph output types.
//!
//! Widgets do not draw. Each frame they resolve into a small description
//! (quads, glyph runs, a clip region, a cursor icon) that the host renderer
//! turns into real scene nodes. All positions are in widget-local units
//! with the scroll offset already applied; `text_origin` and `scroll` are
//! still reported for hosts that manage their own glyph sub-tree.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::color::Color;

/// Render order of the background plate.
pub const BACKGROUND_ORDER: i32 = 1;
/// Render order of selection highlight quads.
pub const SELECTION_ORDER: i32 = 2;
/// Render order of glyphs and the caret quad.
pub const GLYPH_ORDER: i32 = 3;

/// Position/rotation/scale passthrough for a widget root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Transform {
        Transform {
            position,
            ..Transform::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Map a world-space point into this widget's local frame.
    pub fn world_to_local(&self, point: Vec3) -> Vec3 {
        self.matrix().inverse().transform_point3(point)
    }
}

/// Pointer cursor a widget wants while hovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorIcon {
    #[default]
    Default,
    /// Text beam over editable fields.
    Text,
    /// Hand over clickable controls.
    Pointer,
}

/// Horizontal glyph-run alignment relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchorX {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical glyph-run alignment relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchorY {
    Top,
    /// First-line baseline; the frame caret anchors are expressed in.
    #[default]
    TopBaseline,
    Middle,
    BottomBaseline,
    Bottom,
}

/// A flat colored rectangle for the host to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Center in widget-local units.
    pub center: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub opacity: f32,
    pub render_order: i32,
    /// Whether the field's clip region applies to this quad.
    pub clipped: bool,
}

/// A text run for the SDF engine to shape and draw.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    pub text: String,
    /// Anchor position in widget-local units.
    pub position: Vec2,
    pub font_size: f32,
    /// Font resource for the SDF engine; `None` uses its default face.
    pub font: Option<String>,
    pub color: Color,
    pub anchor_x: TextAnchorX,
    pub anchor_y: TextAnchorY,
    /// Wrap width; `None` keeps the run on one line.
    pub max_width: Option<f32>,
    pub letter_spacing: f32,
    pub render_order: i32,
    pub clipped: bool,
}

impl GlyphRun {
    /// Left-aligned baseline-anchored run; callers adjust the rest.
    pub fn new(text: String, position: Vec2, font_size: f32, color: Color) -> GlyphRun {
        GlyphRun {
            text,
            position,
            font_size,
            font: None,
            color,
            anchor_x: TextAnchorX::Left,
            anchor_y: TextAnchorY::TopBaseline,
            max_width: None,
            letter_spacing: 0.0,
            render_order: GLYPH_ORDER,
            clipped: false,
        }
    }
}

/// Stencil clip region in widget-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub center: Vec2,
    pub size: Vec2,
}

/// Per-frame visual description of a text field or text area.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldVisual {
    pub transform: Transform,
    pub background: Quad,
    /// Region items flagged `clipped` are stenciled to.
    pub clip: ClipRect,
    /// Local position of the first-line baseline start.
    pub text_origin: Vec2,
    /// Scroll translation already applied to glyphs/selection/caret.
    pub scroll: Vec2,
    /// `None` when a custom renderer supplies the glyphs.
    pub glyphs: Option<GlyphRun>,
    pub selection: Vec<Quad>,
    pub caret: Option<Quad>,
    pub label: Option<GlyphRun>,
    pub cursor: CursorIcon,
}
