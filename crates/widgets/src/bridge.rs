//! Bridge between a widget and its hidden native element.
//!
//! Owns the mount handle and pushes engine commands down to the platform.
//! The native element is reconfigured on every prop change, not only at
//! mount; dropping the bridge releases the mount.

use caret_core::SelectionDirection;

use crate::error::MountError;
use crate::field::NativeCommand;
use crate::native::{FieldSpec, MountTarget, NativeField, NativeHost};

pub struct NativeBridge {
    field: Box<dyn NativeField>,
    spec: FieldSpec,
}

impl std::fmt::Debug for NativeBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeBridge")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

impl NativeBridge {
    /// Mount a hidden element for `spec` under `target`.
    pub fn mount(
        host: &mut dyn NativeHost,
        spec: FieldSpec,
        target: MountTarget,
    ) -> Result<NativeBridge, MountError> {
        let field = host.mount_field(&spec, target)?;
        log::trace!(
            target: "widgets.bridge",
            "mounted native element: kind={:?} target={:?}",
            spec.kind,
            target
        );
        Ok(NativeBridge { field, spec })
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Reconfigure the native element when the spec changed.
    pub fn sync_spec(&mut self, spec: FieldSpec) {
        if spec != self.spec {
            log::trace!(target: "widgets.bridge", "reapplying native spec: kind={:?}", spec.kind);
            self.field.apply(&spec);
            self.spec = spec;
        }
    }

    pub fn focus(&mut self) {
        self.field.focus();
    }

    pub fn blur(&mut self) {
        self.field.blur();
    }

    pub fn set_selection(&mut self, start: usize, end: usize, direction: SelectionDirection) {
        self.field.set_selection(start, end, direction);
    }

    pub fn select_all(&mut self) {
        self.field.select_all();
    }

    /// Forward one engine command to the native element.
    pub fn run(&mut self, command: &NativeCommand) {
        match *command {
            NativeCommand::Focus => self.focus(),
            NativeCommand::SetSelection {
                start,
                end,
                direction,
            } => self.set_selection(start, end, direction),
            NativeCommand::SelectAll => self.select_all(),
        }
    }
}

impl Drop for NativeBridge {
    fn drop(&mut self) {
        log::trace!(target: "widgets.bridge", "releasing native mount: kind={:?}", self.spec.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHost;

    fn spec_named(name: &str) -> FieldSpec {
        FieldSpec {
            name: Some(name.to_string()),
            ..FieldSpec::default()
        }
    }

    #[test]
    fn sync_spec_reapplies_only_on_change() {
        let mut host = RecordingHost::new();
        let mut bridge =
            NativeBridge::mount(&mut host, spec_named("a"), MountTarget::RendererRoot).unwrap();
        host.log.clear();

        bridge.sync_spec(spec_named("a"));
        assert!(host.log.entries().is_empty());

        bridge.sync_spec(spec_named("b"));
        assert_eq!(host.log.entries(), vec!["apply:Some(\"b\")"]);
    }

    #[test]
    fn commands_reach_the_native_element() {
        let mut host = RecordingHost::new();
        let mut bridge =
            NativeBridge::mount(&mut host, FieldSpec::default(), MountTarget::RendererRoot)
                .unwrap();
        host.log.clear();

        bridge.run(&NativeCommand::Focus);
        bridge.run(&NativeCommand::SetSelection {
            start: 1,
            end: 4,
            direction: SelectionDirection::Backward,
        });
        bridge.run(&NativeCommand::SelectAll);
        assert_eq!(
            host.log.entries(),
            vec!["focus", "set_selection:1..4:backward", "select_all"]
        );
    }

    #[test]
    fn dropping_the_bridge_releases_the_mount() {
        let mut host = RecordingHost::new();
        let bridge =
            NativeBridge::mount(&mut host, FieldSpec::default(), MountTarget::RendererRoot)
                .unwrap();
        drop(bridge);
        assert!(host.log.contains("unmount"));
    }

    #[test]
    fn refused_mount_surfaces_the_error() {
        let mut host = RecordingHost::new();
        host.refuse = true;
        let err = NativeBridge::mount(&mut host, FieldSpec::default(), MountTarget::RendererRoot)
            .unwrap_err();
        assert!(matches!(err, MountError::HostRefused { .. }));
    }
}
