//! Text selection representation.

/// Represents a text selection as a character range.
///
/// The range is always normalized such that `start <= end`.
/// Both `start` and `end` are character indices into the content and are
/// guaranteed to be clamped to `0..=chars` when produced by
/// [`EditorState`](crate::EditorState) methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start character index of the selection (inclusive).
    pub start: usize,
    /// End character index of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// The collapsed range `[i, i]`.
    #[inline]
    pub fn collapsed(i: usize) -> Self {
        Self { start: i, end: i }
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Active edge of a selection, as native text elements report it.
///
/// Forwarded back to the native primitive on programmatic selection updates
/// so its internal caret stays on the same edge the user is dragging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionDirection {
    Forward,
    Backward,
    #[default]
    None,
}

impl SelectionDirection {
    /// The wire form used by DOM-style `setSelectionRange` calls.
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionDirection::Forward => "forward",
            SelectionDirection::Backward => "backward",
            SelectionDirection::None => "none",
        }
    }
}

/// Derive the selection produced by dragging from `anchor` to `hit`.
///
/// A hit before the anchor selects `[hit, anchor]` growing backward; a hit
/// after it selects `[anchor, hit]` growing forward; an equal hit collapses
/// the range with an explicit `None` direction.
///
/// # Examples
///
/// ```
/// use caret_core::{drag_selection, SelectionDirection, SelectionRange};
///
/// let (range, dir) = drag_selection(4, 1);
/// assert_eq!(range, SelectionRange::new(1, 4));
/// assert_eq!(dir, SelectionDirection::Backward);
///
/// let (range, dir) = drag_selection(4, 4);
/// assert!(range.is_empty());
/// assert_eq!(dir, SelectionDirection::None);
/// ```
pub fn drag_selection(anchor: usize, hit: usize) -> (SelectionRange, SelectionDirection) {
    if hit < anchor {
        (SelectionRange::new(hit, anchor), SelectionDirection::Backward)
    } else if hit > anchor {
        (SelectionRange::new(anchor, hit), SelectionDirection::Forward)
    } else {
        (SelectionRange::collapsed(hit), SelectionDirection::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_range_normalizes() {
        let range = SelectionRange::new(10, 5);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 10);
    }

    #[test]
    fn selection_range_len() {
        let range = SelectionRange::new(2, 7);
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn selection_range_is_empty() {
        let empty = SelectionRange::collapsed(3);
        assert!(empty.is_empty());

        let non_empty = SelectionRange::new(3, 5);
        assert!(!non_empty.is_empty());
    }

    #[test]
    fn drag_forward() {
        let (range, dir) = drag_selection(2, 6);
        assert_eq!(range, SelectionRange { start: 2, end: 6 });
        assert_eq!(dir, SelectionDirection::Forward);
    }

    #[test]
    fn drag_backward() {
        let (range, dir) = drag_selection(6, 2);
        assert_eq!(range, SelectionRange { start: 2, end: 6 });
        assert_eq!(dir, SelectionDirection::Backward);
    }

    #[test]
    fn direction_wire_form() {
        assert_eq!(SelectionDirection::Forward.as_str(), "forward");
        assert_eq!(SelectionDirection::Backward.as_str(), "backward");
        assert_eq!(SelectionDirection::None.as_str(), "none");
    }
}
