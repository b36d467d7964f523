//! Facade over the workspace: one dependency pulls in the editing engine
//! (`caret_core`), the layout adapter (`text_layout`) and the widgets.

pub use caret_core;
pub use text_layout;
pub use widgets;
