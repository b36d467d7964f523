//! Multi-line text area.
//!
//! Shows a fixed `rows`-high window over wrapped content. The background
//! plate hangs below the first-line baseline so the baseline frame stays
//! shared with the layout tables; vertical scrolling translates only the
//! glyph/selection/caret sub-tree.

use glam::{Vec2, Vec3};
use text_layout::{GlyphLayout, RawTextMetrics};

use crate::bridge::NativeBridge;
use crate::color::Color;
use crate::error::MountError;
use crate::field::{FieldEngine, NativeCommand};
use crate::native::{
    FieldKind, FieldObserver, FieldSpec, MountTarget, NativeEvent, NativeHost, SizingHint,
};
use crate::scene::{
    BACKGROUND_ORDER, ClipRect, CursorIcon, FieldVisual, GLYPH_ORDER, GlyphRun, Quad,
    SELECTION_ORDER, TextAnchorY, Transform,
};

/// TextArea configuration. Every field has a working default.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAreaProps {
    pub width: f32,
    /// Visible window height in lines.
    pub rows: u32,
    /// Inner spacing, `[left/right, top/bottom]`.
    pub padding: Vec2,
    pub font_size: f32,
    /// Font resource passed through to the SDF engine.
    pub font: Option<String>,
    /// Glyph and caret color.
    pub color: Color,
    pub background_color: Color,
    pub background_opacity: f32,
    pub cursor_width: f32,
    pub selection_color: Color,
    /// Optional label drawn above the plate's top-left corner; doubles as
    /// the native `name` when none is given.
    pub label: Option<String>,
    pub label_font_size: f32,
    pub label_color: Color,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub default_value: Option<String>,
    pub transform: Transform,
}

impl Default for TextAreaProps {
    fn default() -> Self {
        Self {
            width: 1.5,
            rows: 4,
            padding: Vec2::new(0.02, 0.05),
            font_size: 0.0825,
            font: None,
            color: Color::BLACK,
            background_color: Color::LIGHT_GREY,
            background_opacity: 0.3,
            cursor_width: 0.005,
            selection_color: Color::SELECTION,
            label: None,
            label_font_size: 0.07,
            label_color: Color::BLACK,
            name: None,
            placeholder: None,
            default_value: None,
            transform: Transform::default(),
        }
    }
}

impl TextAreaProps {
    /// Non-finite numeric props fall back to their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.width.is_finite() {
            self.width = defaults.width;
        }
        if !self.padding.is_finite() {
            self.padding = defaults.padding;
        }
        if !self.font_size.is_finite() {
            self.font_size = defaults.font_size;
        }
        if !self.cursor_width.is_finite() {
            self.cursor_width = defaults.cursor_width;
        }
        if self.rows == 0 {
            self.rows = defaults.rows;
        }
        self
    }
}

pub struct TextArea {
    props: TextAreaProps,
    engine: FieldEngine,
    bridge: NativeBridge,
    custom_renderer: bool,
    hovered: bool,
}

impl TextArea {
    /// Mount a text area on `host` under `target`.
    pub fn new(
        host: &mut dyn NativeHost,
        target: MountTarget,
        props: TextAreaProps,
    ) -> Result<TextArea, MountError> {
        Self::build(host, target, props, false)
    }

    /// Text area whose glyphs the caller draws itself.
    pub fn with_custom_renderer(
        host: &mut dyn NativeHost,
        target: MountTarget,
        props: TextAreaProps,
    ) -> Result<TextArea, MountError> {
        Self::build(host, target, props, true)
    }

    fn build(
        host: &mut dyn NativeHost,
        target: MountTarget,
        props: TextAreaProps,
        custom_renderer: bool,
    ) -> Result<TextArea, MountError> {
        let props = props.sanitized();
        let bridge = NativeBridge::mount(host, Self::field_spec(&props), target)?;
        Ok(TextArea {
            props,
            engine: FieldEngine::new(),
            bridge,
            custom_renderer,
            hovered: false,
        })
    }

    fn field_spec(props: &TextAreaProps) -> FieldSpec {
        FieldSpec {
            kind: FieldKind::MultiLine,
            name: props.name.clone().or_else(|| props.label.clone()),
            placeholder: props.placeholder.clone(),
            default_value: props.default_value.clone(),
            rows: props.rows,
            sizing: SizingHint::Px {
                font: props.font_size * 100.0,
                width: (props.width - 2.0 * props.padding.x) * 100.0,
                hard_wrap: true,
            },
        }
    }

    /// Replace the props wholesale, reconfiguring the native element when
    /// its attributes changed.
    pub fn set_props(&mut self, props: TextAreaProps) {
        let props = props.sanitized();
        self.bridge.sync_spec(Self::field_spec(&props));
        self.props = props;
        self.refresh_scroll();
    }

    pub fn props(&self) -> &TextAreaProps {
        &self.props
    }

    pub fn engine(&self) -> &FieldEngine {
        &self.engine
    }

    pub fn content(&self) -> &str {
        self.engine.state().content()
    }

    /// Line height from the synced metrics, estimated until they arrive.
    fn line_height(&self) -> f32 {
        self.engine
            .layout()
            .map(|layout| layout.line_height())
            .unwrap_or(self.props.font_size * 1.2)
    }

    /// Plate height: the `rows`-line window plus vertical padding.
    pub fn height(&self) -> f32 {
        self.props.rows as f32 * self.line_height() + 2.0 * self.props.padding.y
    }

    /// The plate hangs below the first-line baseline by this much.
    fn plate_center_y(&self) -> f32 {
        -self.height() / 2.0 + self.props.font_size / 2.0 + self.props.padding.y
    }

    fn inner_width(&self) -> f32 {
        self.props.width - 2.0 * self.props.padding.x
    }

    /// Local position of the first-line baseline start.
    fn text_origin(&self) -> Vec2 {
        Vec2::new(-self.props.width / 2.0 + self.props.padding.x, 0.0)
    }

    /// Adopt freshly shaped metrics from the text engine.
    pub fn sync_layout(&mut self, metrics: &RawTextMetrics) {
        match GlyphLayout::multi_line(metrics) {
            Some(layout) => {
                self.engine.sync_layout(layout);
                self.refresh_scroll();
            }
            None => {
                log::warn!(target: "widgets.field", "discarding malformed glyph metrics");
            }
        }
    }

    /// Route one event reported by the hidden native element.
    pub fn native_event(
        &mut self,
        event: &NativeEvent,
        now_s: f64,
        observer: &mut dyn FieldObserver,
    ) {
        self.engine.apply_native(event, now_s);
        self.refresh_scroll();
        match event {
            NativeEvent::Change { value: Some(value) } => observer.on_change(value),
            NativeEvent::Change { value: None } => {}
            NativeEvent::Focus => observer.on_focus(),
            NativeEvent::Blur => observer.on_blur(),
            NativeEvent::Select {
                start,
                end,
                direction,
            } => observer.on_select(*start, *end, *direction),
        }
    }

    /// Pointer press at a world-space point.
    pub fn pointer_down(&mut self, world: Vec3, now_s: f64) {
        let point = self.to_text_frame(world);
        let commands = self.engine.pointer_down(point, now_s);
        self.run_commands(commands);
        self.refresh_scroll();
    }

    /// Pointer drag with the primary button held.
    pub fn pointer_move(&mut self, world: Vec3, now_s: f64) {
        let point = self.to_text_frame(world);
        let commands = self.engine.pointer_move(point, now_s);
        self.run_commands(commands);
        self.refresh_scroll();
    }

    pub fn pointer_up(&mut self) {
        self.engine.pointer_up();
    }

    /// Hover flag driving the cursor icon on the visual output.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Per-frame animation step.
    pub fn frame(&mut self, now_s: f64, dt_s: f32) {
        self.engine.frame(now_s, dt_s);
    }

    fn run_commands(&mut self, commands: Vec<NativeCommand>) {
        for command in &commands {
            self.bridge.run(command);
        }
    }

    /// Glyphs render lowered by half the cap height; compensate so pointer
    /// points land in the baseline frame the anchors use.
    fn to_text_frame(&self, world: Vec3) -> Vec2 {
        let local = self.props.transform.world_to_local(world);
        let cap_offset = self
            .engine
            .layout()
            .map(|layout| layout.cap_height() / 2.0)
            .unwrap_or(0.0);
        Vec2::new(local.x, local.y + cap_offset) - self.text_origin()
    }

    fn refresh_scroll(&mut self) {
        self.engine.refresh_scroll_y(self.props.rows);
    }

    /// Resolve this frame's drawable description.
    pub fn visual(&self) -> FieldVisual {
        let props = &self.props;
        let height = self.height();
        let plate_center = Vec2::new(0.0, self.plate_center_y());
        let origin = self.text_origin();
        let scroll = self.engine.scroll();

        let background = Quad {
            center: plate_center,
            size: Vec2::new(props.width, height),
            color: props.background_color,
            opacity: props.background_opacity,
            render_order: BACKGROUND_ORDER,
            clipped: false,
        };
        let clip = ClipRect {
            center: plate_center,
            size: Vec2::new(props.width - props.padding.x, height - props.padding.y),
        };

        let cap_offset = self
            .engine
            .layout()
            .map(|layout| layout.cap_height() / 2.0)
            .unwrap_or(0.0);
        let glyphs = (!self.custom_renderer).then(|| {
            let mut run = GlyphRun::new(
                self.engine.state().content().to_string(),
                origin + scroll + Vec2::new(0.0, -cap_offset),
                props.font_size,
                props.color,
            );
            run.font = props.font.clone();
            run.max_width = Some(self.inner_width());
            run.clipped = true;
            run
        });

        let label = props.label.as_ref().map(|text| {
            let mut run = GlyphRun::new(
                text.clone(),
                Vec2::new(
                    -props.width / 2.0,
                    (props.font_size + 2.0 * props.padding.y) / 2.0,
                ),
                props.label_font_size,
                props.label_color,
            );
            run.font = props.font.clone();
            run.anchor_y = TextAnchorY::Bottom;
            run
        });

        FieldVisual {
            transform: props.transform,
            background,
            clip,
            text_origin: origin,
            scroll,
            glyphs,
            selection: self.selection_quads(origin, scroll),
            caret: self.caret_quad(origin, scroll),
            label,
            cursor: if self.hovered {
                CursorIcon::Text
            } else {
                CursorIcon::Default
            },
        }
    }

    fn selection_quads(&self, origin: Vec2, scroll: Vec2) -> Vec<Quad> {
        let selection = self.engine.state().selection();
        if selection.is_empty() {
            return Vec::new();
        }
        let Some(layout) = self.engine.live_layout() else {
            return Vec::new();
        };
        layout
            .selection_rects(selection.start, selection.end)
            .iter()
            .map(|rect| Quad {
                center: origin + scroll + rect.center(),
                size: Vec2::new(rect.width(), rect.height()),
                color: self.props.selection_color,
                opacity: 1.0,
                render_order: SELECTION_ORDER,
                clipped: true,
            })
            .collect()
    }

    fn caret_quad(&self, origin: Vec2, scroll: Vec2) -> Option<Quad> {
        if !self.engine.state().shows_caret() {
            return None;
        }
        let caret = self.engine.state().caret()?;
        let (anchor, descender) = match self.engine.layout() {
            Some(layout) => (layout.anchor(caret), layout.descender()),
            None => (Vec2::ZERO, 0.0),
        };
        Some(Quad {
            center: origin
                + scroll
                + Vec2::new(
                    anchor.x + self.props.cursor_width / 2.0,
                    anchor.y - descender,
                ),
            size: Vec2::new(self.props.cursor_width, self.props.font_size),
            color: self.props.color,
            opacity: self.engine.caret_opacity(),
            render_order: GLYPH_ORDER,
            clipped: false,
        })
    }
}
