//! Shared in-crate test fixtures: a native host that records every call.

use std::cell::RefCell;
use std::rc::Rc;

use caret_core::SelectionDirection;

use crate::error::MountError;
use crate::native::{FieldSpec, FormId, MountTarget, NativeField, NativeForm, NativeHost};

/// Call journal shared between a host and the handles it hands out.
#[derive(Clone, Default)]
pub(crate) struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub(crate) fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub(crate) fn contains(&self, needle: &str) -> bool {
        self.0.borrow().iter().any(|entry| entry == needle)
    }

    pub(crate) fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub(crate) struct RecordingHost {
    pub(crate) log: CallLog,
    pub(crate) refuse: bool,
    next_form: u64,
}

impl RecordingHost {
    pub(crate) fn new() -> RecordingHost {
        RecordingHost {
            log: CallLog::default(),
            refuse: false,
            next_form: 1,
        }
    }
}

impl NativeHost for RecordingHost {
    fn mount_field(
        &mut self,
        spec: &FieldSpec,
        target: MountTarget,
    ) -> Result<Box<dyn NativeField>, MountError> {
        if self.refuse {
            return Err(MountError::HostRefused {
                reason: "refused by test host".to_string(),
            });
        }
        self.log
            .push(format!("mount:{:?}:{:?}:{:?}", spec.kind, spec.default_value, target));
        Ok(Box::new(RecordingField {
            log: self.log.clone(),
        }))
    }

    fn mount_form(&mut self) -> Result<Box<dyn NativeForm>, MountError> {
        let id = FormId::from_raw(self.next_form);
        self.next_form += 1;
        self.log.push(format!("mount_form:{}", id.as_raw()));
        Ok(Box::new(RecordingForm {
            log: self.log.clone(),
            id,
        }))
    }
}

pub(crate) struct RecordingField {
    log: CallLog,
}

impl NativeField for RecordingField {
    fn apply(&mut self, spec: &FieldSpec) {
        self.log.push(format!("apply:{:?}", spec.name));
    }

    fn focus(&mut self) {
        self.log.push("focus");
    }

    fn blur(&mut self) {
        self.log.push("blur");
    }

    fn set_selection(&mut self, start: usize, end: usize, direction: SelectionDirection) {
        self.log
            .push(format!("set_selection:{start}..{end}:{}", direction.as_str()));
    }

    fn select_all(&mut self) {
        self.log.push("select_all");
    }
}

impl Drop for RecordingField {
    fn drop(&mut self) {
        self.log.push("unmount");
    }
}

pub(crate) struct RecordingForm {
    log: CallLog,
    id: FormId,
}

impl NativeForm for RecordingForm {
    fn id(&self) -> FormId {
        self.id
    }

    fn request_submit(&mut self) {
        self.log.push("request_submit");
    }
}

impl Drop for RecordingForm {
    fn drop(&mut self) {
        self.log.push("unmount_form");
    }
}
