//! Hidden native form container.

use crate::error::MountError;
use crate::native::{FormId, MountTarget, NativeForm, NativeHost};

/// Owns one hidden native form element.
///
/// Fields and submit inputs attach to it through [`FormContainer::target`],
/// so one logical form shares a single native mount point. Dropping the
/// container detaches the native form.
pub struct FormContainer {
    form: Box<dyn NativeForm>,
}

impl FormContainer {
    pub fn mount(host: &mut dyn NativeHost) -> Result<FormContainer, MountError> {
        let form = host.mount_form()?;
        log::trace!(target: "widgets.form", "mounted native form {}", form.id().as_raw());
        Ok(FormContainer { form })
    }

    pub fn id(&self) -> FormId {
        self.form.id()
    }

    /// Mount target for fields belonging to this form.
    pub fn target(&self) -> MountTarget {
        MountTarget::Form(self.id())
    }

    /// Run the platform's submit pipeline.
    pub fn request_submit(&mut self) {
        log::trace!(target: "widgets.form", "submit requested for form {}", self.id().as_raw());
        self.form.request_submit();
    }
}
