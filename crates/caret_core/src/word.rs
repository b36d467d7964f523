//! Whitespace-delimited word lookup for double-click selection.

use crate::selection::SelectionRange;

/// Bounds of the contiguous non-whitespace run containing `caret`.
///
/// Scans forward from the caret to the next whitespace character (or end of
/// text) and backward to the previous one (exclusive, or start of text).
/// Only whitespace delimits words; punctuation is part of a word. A caret
/// sitting on a whitespace character selects that character.
///
/// # Examples
///
/// ```
/// use caret_core::{word_at, SelectionRange};
///
/// assert_eq!(word_at("hello world", 2), SelectionRange::new(0, 5));
/// assert_eq!(word_at("hello world", 8), SelectionRange::new(6, 11));
/// assert_eq!(word_at("one", 3), SelectionRange::new(0, 3));
/// ```
pub fn word_at(content: &str, caret: usize) -> SelectionRange {
    let chars: Vec<char> = content.chars().collect();
    let n = chars.len();
    let caret = caret.min(n);

    let mut end = n;
    for (i, ch) in chars.iter().enumerate().skip(caret) {
        if ch.is_whitespace() {
            end = i;
            break;
        }
    }

    let mut start = 0;
    let mut i = caret;
    while i > 0 {
        if i < n && chars[i].is_whitespace() {
            start = i + 1;
            break;
        }
        i -= 1;
    }

    SelectionRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_first_word() {
        assert_eq!(word_at("hello world", 0), SelectionRange::new(0, 5));
        assert_eq!(word_at("hello world", 2), SelectionRange::new(0, 5));
        assert_eq!(word_at("hello world", 4), SelectionRange::new(0, 5));
    }

    #[test]
    fn selects_last_word_up_to_end_of_text() {
        assert_eq!(word_at("hello world", 7), SelectionRange::new(6, 11));
        assert_eq!(word_at("hello world", 11), SelectionRange::new(6, 11));
    }

    #[test]
    fn punctuation_belongs_to_the_word() {
        assert_eq!(word_at("foo,bar baz", 2), SelectionRange::new(0, 7));
    }

    #[test]
    fn caret_on_whitespace_selects_it() {
        assert_eq!(word_at("hello world", 5), SelectionRange::new(5, 6));
    }

    #[test]
    fn newlines_delimit_words_too() {
        assert_eq!(word_at("line1\nline2", 8), SelectionRange::new(6, 11));
    }

    #[test]
    fn empty_content_yields_empty_range() {
        assert_eq!(word_at("", 0), SelectionRange::collapsed(0));
    }

    #[test]
    fn caret_past_end_is_clamped() {
        assert_eq!(word_at("abc", 99), SelectionRange::new(0, 3));
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        assert_eq!(word_at("héllo wörld", 2), SelectionRange::new(0, 5));
    }
}
