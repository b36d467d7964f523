//! Per-widget caret/selection state machine.
//!
//! One [`EditorState`] is owned by each text widget instance. It mirrors the
//! bound native text element: content is replaced only via `change` events,
//! caret and selection only via `focus`/`blur`/`select` events and pointer
//! gestures routed by the integration layer.

use crate::selection::SelectionRange;

/// Editing state synchronized with one native text element.
///
/// All indices are character indices clamped to `0..=chars`. The caret is
/// derived from the selection so the two can never disagree: a collapsed
/// selection `[i, i]` means a concrete caret at `i`, a non-empty range means
/// no single caret.
#[derive(Clone, Debug)]
pub struct EditorState {
    content: String,
    /// Cached `content.chars().count()`.
    chars: usize,
    selection: SelectionRange,
    active: bool,
    last_edit_s: f64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            content: String::new(),
            chars: 0,
            selection: SelectionRange::collapsed(0),
            active: false,
            last_edit_s: 0.0,
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded with an initial value (the native `default_value`).
    pub fn with_content(content: &str) -> Self {
        let mut st = Self::default();
        st.content.push_str(content);
        st.chars = content.chars().count();
        st
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Character count of the content (not byte length).
    pub fn chars(&self) -> usize {
        self.chars
    }

    /// Concrete caret index, or `None` while a non-empty range is selected.
    pub fn caret(&self) -> Option<usize> {
        if self.selection.is_empty() {
            Some(self.selection.start)
        } else {
            None
        }
    }

    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// Whether the field currently holds native focus.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Clock time of the last edit/selection activity, in seconds.
    pub fn last_edit_s(&self) -> f64 {
        self.last_edit_s
    }

    /// A caret is rendered only while focused with a collapsed selection.
    pub fn shows_caret(&self) -> bool {
        self.active && self.selection.is_empty()
    }

    /// Native `focus` event. The caret lands on the reported index
    /// (callers default it to 0 when the native element reports none).
    pub fn focus(&mut self, caret: usize) {
        self.active = true;
        self.selection = SelectionRange::collapsed(caret.min(self.chars));
    }

    /// Native `blur` event: selection is forcibly reset to `[0, 0]` and the
    /// field deactivates, regardless of prior state.
    pub fn blur(&mut self) {
        self.active = false;
        self.selection = SelectionRange::collapsed(0);
    }

    /// Native `change` event: the native element's value replaces the
    /// content wholesale. Keeps the caret/selection clamped to the new
    /// length and refreshes the last-edit timestamp.
    pub fn change(&mut self, value: &str, now_s: f64) {
        if value != self.content {
            self.content.clear();
            self.content.push_str(value);
            self.chars = value.chars().count();
            self.clamp_selection();
        }
        self.last_edit_s = now_s;
    }

    /// Native `select` event: adopt the reported range verbatim (clamped).
    pub fn select(&mut self, start: usize, end: usize, now_s: f64) {
        self.selection = SelectionRange::new(start.min(self.chars), end.min(self.chars));
        self.last_edit_s = now_s;
    }

    /// Collapse the selection onto a caret index (pointer-down placement).
    pub fn set_caret(&mut self, index: usize) {
        self.selection = SelectionRange::collapsed(index.min(self.chars));
    }

    /// Select the whole content. Empty content collapses to a caret at 0.
    pub fn select_all(&mut self, now_s: f64) {
        self.selection = SelectionRange::new(0, self.chars);
        self.last_edit_s = now_s;
    }

    /// Refresh the last-edit timestamp without touching the selection.
    /// Pointer-down does this so the caret shows solid while repositioning.
    pub fn touch(&mut self, now_s: f64) {
        self.last_edit_s = now_s;
    }

    fn clamp_selection(&mut self) {
        if self.selection.end > self.chars {
            self.selection =
                SelectionRange::new(self.selection.start.min(self.chars), self.chars);
        }
    }
}
