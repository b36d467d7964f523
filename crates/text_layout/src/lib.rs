//! # text_layout
//!
//! Bridges the host's SDF text engine and the caret logic: raw shaping
//! metrics come in as [`RawTextMetrics`], a [`GlyphLayout`] turns them into
//! the caret anchor table, point-to-caret lookup, and selection highlight
//! rects the widgets consume.
//!
//! The crate never talks to the engine itself. Hosts push a metrics snapshot
//! after every shaping pass; everything here is a pure function of that
//! snapshot.

mod glyphs;
mod metrics;
mod select_rect;

pub use crate::glyphs::GlyphLayout;
pub use crate::metrics::{FixedPitchShaper, RawTextMetrics};
pub use crate::select_rect::SelectionRect;
