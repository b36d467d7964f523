//! Native host seam.
//!
//! Widgets never implement text editing themselves. Each field mounts a
//! hidden platform text element that owns keyboard, IME and selection
//! behavior, and mirrors its events into widget state. These traits are the
//! whole contract between the widget layer and the platform: hosts
//! implement them, widgets drive them.

use caret_core::SelectionDirection;

use crate::error::MountError;

/// Identifies one mounted native form element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(u64);

impl FormId {
    pub const fn from_raw(raw: u64) -> FormId {
        FormId(raw)
    }

    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// Where a hidden native element attaches.
///
/// Always injected explicitly; widgets never look up an ambient container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MountTarget {
    /// The renderer's own host container.
    #[default]
    RendererRoot,
    /// A previously mounted form element.
    Form(FormId),
}

/// Which native text primitive a field needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Masked entry; the native value stays the real text.
    Password,
    MultiLine,
    /// Hidden submit input carrying a button's value into form payloads.
    Submit,
}

/// Sizing hints keeping native selection geometry near the rendered glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizingHint {
    /// No explicit sizing (submit inputs).
    Intrinsic,
    /// Width in `em` units, single-line.
    Em { width: f32 },
    /// Pixel font and width, optionally hard-wrapping at that width.
    Px { font: f32, width: f32, hard_wrap: bool },
}

/// Everything the host needs to configure a hidden native element.
///
/// Re-sent on every widget prop change, not only at mount; attributes such
/// as `name` and width-derived sizing must track live props.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    /// Initial native value, passed through verbatim.
    pub default_value: Option<String>,
    /// Visible native rows; meaningful for [`FieldKind::MultiLine`].
    pub rows: u32,
    pub sizing: SizingHint,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            kind: FieldKind::Text,
            name: None,
            placeholder: None,
            default_value: None,
            rows: 1,
            sizing: SizingHint::Intrinsic,
        }
    }
}

/// Events a hidden native element reports back to its widget.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeEvent {
    Focus,
    Blur,
    /// Value change; events carrying no payload are dropped.
    Change { value: Option<String> },
    /// Selection change, as `selectionStart/End/Direction` report it.
    Select {
        start: usize,
        end: usize,
        direction: SelectionDirection,
    },
}

/// Platform side of the bridge. Implementations own the real hidden
/// elements and surface their activity back through [`NativeEvent`]s.
pub trait NativeHost {
    /// Mount a hidden text element under `target`.
    ///
    /// The returned handle owns the mount: dropping it must detach the
    /// element and its container, leaving no dangling nodes.
    fn mount_field(
        &mut self,
        spec: &FieldSpec,
        target: MountTarget,
    ) -> Result<Box<dyn NativeField>, MountError>;

    /// Mount a hidden form element fields and submit inputs can attach to.
    fn mount_form(&mut self) -> Result<Box<dyn NativeForm>, MountError>;
}

/// One mounted hidden text element.
pub trait NativeField {
    /// Re-apply attributes and sizing after a prop change.
    fn apply(&mut self, spec: &FieldSpec);

    fn focus(&mut self);

    fn blur(&mut self);

    /// Program the native selection, keeping its caret on `direction`'s edge.
    fn set_selection(&mut self, start: usize, end: usize, direction: SelectionDirection);

    /// Select the whole native value.
    fn select_all(&mut self);
}

/// One mounted hidden form element.
pub trait NativeForm {
    fn id(&self) -> FormId;

    /// Run the platform's submit pipeline for this form.
    fn request_submit(&mut self);
}

/// Widget-level callbacks mirroring the native element's events.
///
/// Every method defaults to a no-op so callers implement only what they
/// need.
pub trait FieldObserver {
    fn on_change(&mut self, value: &str) {
        let _ = value;
    }

    fn on_focus(&mut self) {}

    fn on_blur(&mut self) {}

    fn on_select(&mut self, start: usize, end: usize, direction: SelectionDirection) {
        let _ = (start, end, direction);
    }
}

/// Observer that ignores every event.
impl FieldObserver for () {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_id_round_trips_its_raw_value() {
        let id = FormId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
        assert_eq!(MountTarget::Form(id), MountTarget::Form(FormId::from_raw(42)));
    }

    #[test]
    fn default_target_is_the_renderer_root() {
        assert_eq!(MountTarget::default(), MountTarget::RendererRoot);
    }
}
