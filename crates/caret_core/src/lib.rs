//! # caret_core
//!
//! UI-agnostic caret/selection state engine for the form widget library.
//!
//! This crate provides the editing-state building blocks shared by every
//! text widget:
//! - [`EditorState`]: per-widget content, caret, selection, focus flag and
//!   last-edit timestamp, driven by native text-element events
//! - [`SelectionRange`] / [`SelectionDirection`]: normalized selections and
//!   the active-edge convention native elements use
//! - [`word_at`]: whitespace-delimited word lookup for double-click
//! - [`BlinkState`]: damped caret blink, advanced once per rendered frame
//! - scroll window math ([`scroll_x_for_caret`] and friends) keeping the
//!   caret inside the visible window
//! - [`ClickTracker`]: double/triple-click detection from raw presses
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any scene graph or rendering types
//! - Glyph layout or hit-testing systems
//! - Platform/native-host APIs
//!
//! It depends only on `std`, works in character indices throughout (the
//! unit native text elements report selections in), and every function is
//! pure or operates on plainly owned state, so the whole editing model is
//! testable without a renderer.

mod blink;
mod click;
mod scroll;
mod selection;
mod state;
mod word;

pub use blink::{BLINK_LAMBDA, BLINK_PERIOD_S, BLINK_SOLID_S, BlinkState, blink_target, damp};
pub use click::{ClickTracker, MULTI_CLICK_INTERVAL_S, MULTI_CLICK_SLOP};
pub use scroll::{jump_delta, scroll_x_for_caret, scroll_x_for_range, scroll_y_for_caret};
pub use selection::{SelectionDirection, SelectionRange, drag_selection};
pub use state::EditorState;
pub use word::word_at;
