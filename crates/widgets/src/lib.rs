//! # widgets
//!
//! 3D form widgets backed by hidden native text elements.
//!
//! Each widget renders its own plate, glyphs, selection and caret inside the
//! scene, while a real platform input element (mounted off-screen through
//! [`NativeHost`]) owns the text editing itself: keyboard handling, IME,
//! clipboard and form submission. The crate keeps the two in sync:
//!
//! - [`TextField`] / [`TextArea`]: single- and multi-line editable fields
//! - [`Label`] / [`SubmitButton`] / [`FormContainer`]: the surrounding form
//! - [`FieldEngine`]: the shared pointer/selection/scroll/blink state machine
//! - [`NativeBridge`]: ownership of one mounted native element, replaying
//!   [`NativeCommand`]s into it and releasing the mount on drop
//!
//! Widgets never mutate their own text. Pointer gestures are translated into
//! [`NativeCommand`]s for the native element, and the element's echoed
//! [`NativeEvent`]s (focus, blur, change, select) are the single source of
//! truth folded back into widget state.
//!
//! Rendering is expressed as plain data ([`FieldVisual`], [`ButtonVisual`]):
//! quads, glyph runs and clip rectangles for the host renderer to draw, so
//! the crate stays independent of any particular scene graph.

mod bridge;
mod color;
mod error;
mod field;
mod form;
mod label;
mod native;
mod scene;
mod submit;
mod text_area;
mod text_field;

#[cfg(test)]
mod testing;

pub use bridge::NativeBridge;
pub use color::Color;
pub use error::MountError;
pub use field::{FieldEngine, NativeCommand};
pub use form::FormContainer;
pub use label::{Label, LabelProps, LabelVisual};
pub use native::{
    FieldKind, FieldObserver, FieldSpec, FormId, MountTarget, NativeEvent, NativeField,
    NativeForm, NativeHost, SizingHint,
};
pub use scene::{
    BACKGROUND_ORDER, ClipRect, CursorIcon, FieldVisual, GLYPH_ORDER, GlyphRun, Quad,
    SELECTION_ORDER, TextAnchorX, TextAnchorY, Transform,
};
pub use submit::{ButtonVisual, SubmitButton, SubmitButtonProps};
pub use text_area::{TextArea, TextAreaProps};
pub use text_field::{TextField, TextFieldKind, TextFieldProps};

pub use caret_core::{EditorState, SelectionDirection, SelectionRange};
pub use text_layout::{FixedPitchShaper, GlyphLayout, RawTextMetrics, SelectionRect};
