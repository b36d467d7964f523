//! Shared editing engine behind the text widgets.
//!
//! [`FieldEngine`] routes pointer gestures and native events into the
//! caret/selection state, keeps the scroll offset pinned to the caret and
//! steps the blink animation. It owns no scene nodes and talks to the
//! native element only through returned [`NativeCommand`]s, so the whole
//! event pipeline runs without a host in tests.

use caret_core::{
    BlinkState, ClickTracker, EditorState, SelectionDirection, drag_selection, scroll_x_for_caret,
    scroll_x_for_range, scroll_y_for_caret, word_at,
};
use glam::Vec2;
use text_layout::GlyphLayout;

use crate::native::NativeEvent;

/// Instruction for the hidden native element, produced by gesture routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeCommand {
    /// Give the native element keyboard focus.
    Focus,
    /// Program the native selection.
    SetSelection {
        start: usize,
        end: usize,
        direction: SelectionDirection,
    },
    /// Select the whole native value.
    SelectAll,
}

#[derive(Debug)]
pub struct FieldEngine {
    state: EditorState,
    layout: Option<GlyphLayout>,
    scroll: Vec2,
    blink: BlinkState,
    clicks: ClickTracker,
    /// Caret index where the active drag started.
    drag_anchor: Option<usize>,
    /// Active edge of the current range selection, as last reported.
    direction: SelectionDirection,
    /// Double presses select everything instead of a word. Used by masked
    /// fields, whose rendered glyphs have no real word boundaries.
    select_all_on_double: bool,
}

impl Default for FieldEngine {
    fn default() -> Self {
        Self {
            state: EditorState::new(),
            layout: None,
            scroll: Vec2::ZERO,
            blink: BlinkState::default(),
            clicks: ClickTracker::new(),
            drag_anchor: None,
            direction: SelectionDirection::None,
            select_all_on_double: false,
        }
    }
}

impl FieldEngine {
    pub fn new() -> FieldEngine {
        FieldEngine::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Current glyph/caret sub-tree translation.
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Smoothed caret opacity for this frame.
    pub fn caret_opacity(&self) -> f32 {
        self.blink.opacity
    }

    /// Active selection edge last reported by the native element.
    pub fn direction(&self) -> SelectionDirection {
        self.direction
    }

    pub fn set_select_all_on_double(&mut self, on: bool) {
        self.select_all_on_double = on;
    }

    /// Adopt freshly shaped metrics from the text engine.
    pub fn sync_layout(&mut self, layout: GlyphLayout) {
        log::trace!(
            target: "widgets.field",
            "layout synced: {} anchors over {} lines",
            layout.anchor_count(),
            layout.line_count()
        );
        self.layout = Some(layout);
    }

    /// Current layout, only if it matches the live content.
    ///
    /// Metrics arrive asynchronously, so right after an edit the stored
    /// table can still describe the previous content. Hit-testing and
    /// scrolling skip those frames rather than mixing indices.
    pub fn live_layout(&self) -> Option<&GlyphLayout> {
        self.layout
            .as_ref()
            .filter(|layout| !layout.is_stale(self.state.content()))
    }

    /// Last synced layout, live or stale. Caret placement tolerates stale
    /// anchors (lookups clamp) so the caret never vanishes mid-edit.
    pub fn layout(&self) -> Option<&GlyphLayout> {
        self.layout.as_ref()
    }

    /// Apply one event reported by the hidden native element.
    pub fn apply_native(&mut self, event: &NativeEvent, now_s: f64) {
        match event {
            NativeEvent::Focus => {
                let caret = self.state.selection().start;
                self.state.focus(caret);
            }
            NativeEvent::Blur => {
                self.state.blur();
                self.drag_anchor = None;
                self.direction = SelectionDirection::None;
                self.clicks.reset();
            }
            NativeEvent::Change { value: Some(value) } => {
                self.state.change(value, now_s);
            }
            // Some platforms deliver change events without a payload.
            NativeEvent::Change { value: None } => {}
            NativeEvent::Select {
                start,
                end,
                direction,
            } => {
                self.state.select(*start, *end, now_s);
                self.direction = *direction;
            }
        }
    }

    /// Map a point in the text frame (origin at the first-line baseline
    /// start, scroll not applied) to a character index.
    ///
    /// `None` while the layout is absent or stale, the content is empty, or
    /// the point is not finite.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        if !point.is_finite() {
            return None;
        }
        if self.state.chars() == 0 {
            return None;
        }
        let layout = self.live_layout()?;
        Some(layout.caret_at_point(point - self.scroll))
    }

    /// Pointer press in the text frame.
    ///
    /// Places the caret, or grows the gesture into a word/full selection on
    /// chained presses. Returned commands keep the native element in step.
    pub fn pointer_down(&mut self, point: Vec2, now_s: f64) -> Vec<NativeCommand> {
        self.state.touch(now_s);
        let presses = self.clicks.register(point.x, point.y, now_s);
        log::trace!(target: "widgets.field", "pointer down: presses={presses}");

        let mut commands = Vec::new();
        if !self.state.is_active() {
            commands.push(NativeCommand::Focus);
        }

        match presses {
            2 => {
                self.drag_anchor = None;
                if self.select_all_on_double {
                    self.state.select_all(now_s);
                    commands.push(NativeCommand::SelectAll);
                } else if let Some(hit) = self.hit_test(point) {
                    let word = word_at(self.state.content(), hit);
                    self.state.select(word.start, word.end, now_s);
                    self.direction = SelectionDirection::None;
                    commands.push(NativeCommand::SetSelection {
                        start: word.start,
                        end: word.end,
                        direction: SelectionDirection::None,
                    });
                }
            }
            3 => {
                self.drag_anchor = None;
                self.state.select_all(now_s);
                commands.push(NativeCommand::SelectAll);
            }
            _ => {
                if let Some(hit) = self.hit_test(point) {
                    self.state.set_caret(hit);
                    self.direction = SelectionDirection::None;
                    self.drag_anchor = Some(hit);
                    commands.push(NativeCommand::SetSelection {
                        start: hit,
                        end: hit,
                        direction: SelectionDirection::None,
                    });
                }
            }
        }
        commands
    }

    /// Pointer drag with the primary button held.
    pub fn pointer_move(&mut self, point: Vec2, now_s: f64) -> Vec<NativeCommand> {
        let Some(anchor) = self.drag_anchor else {
            return Vec::new();
        };
        let Some(hit) = self.hit_test(point) else {
            return Vec::new();
        };
        let (range, direction) = drag_selection(anchor, hit);
        self.state.select(range.start, range.end, now_s);
        self.direction = direction;
        vec![NativeCommand::SetSelection {
            start: range.start,
            end: range.end,
            direction,
        }]
    }

    /// Pointer release ends any drag.
    pub fn pointer_up(&mut self) {
        self.drag_anchor = None;
    }

    /// Per-frame blink step.
    pub fn frame(&mut self, now_s: f64, dt_s: f32) {
        self.blink = self.blink.step(now_s, self.state.last_edit_s(), dt_s);
    }

    /// Keep the caret (or the active selection edge) horizontally visible.
    ///
    /// The window is `[0, inner_width]` in resolved units; when the caret
    /// has a previous character, the left bound rises so that character
    /// stays visible as context.
    pub fn refresh_scroll_x(&mut self, inner_width: f32) {
        let Some(layout) = self.live_layout() else {
            return;
        };
        let next = match self.state.caret() {
            Some(caret) => scroll_x_for_caret(
                self.scroll.x,
                layout.anchor(caret).x,
                layout.prev_advance(caret),
                inner_width,
            ),
            None => {
                let selection = self.state.selection();
                scroll_x_for_range(
                    self.scroll.x,
                    layout.anchor(selection.start).x,
                    layout.anchor(selection.end).x,
                    self.direction,
                    inner_width,
                )
            }
        };
        self.scroll.x = next;
    }

    /// Keep the caret's row inside the `rows`-high visible window.
    ///
    /// During a drag the native element reports which selection edge is
    /// active; that edge's row is the one kept visible.
    pub fn refresh_scroll_y(&mut self, rows: u32) {
        let Some(layout) = self.live_layout() else {
            return;
        };
        let selection = self.state.selection();
        let edge = match self.state.caret() {
            Some(caret) => caret,
            None => match self.direction {
                SelectionDirection::Backward => selection.start,
                _ => selection.end,
            },
        };
        let next = scroll_y_for_caret(
            self.scroll.y,
            layout.anchor(edge).y,
            rows,
            layout.line_height(),
        );
        self.scroll.y = next;
    }
}
