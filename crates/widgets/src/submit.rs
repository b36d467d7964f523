//! Form submit button.

use glam::Vec2;

use crate::bridge::NativeBridge;
use crate::color::Color;
use crate::error::MountError;
use crate::form::FormContainer;
use crate::native::{FieldKind, FieldSpec, NativeHost, SizingHint};
use crate::scene::{
    BACKGROUND_ORDER, CursorIcon, GlyphRun, Quad, TextAnchorX, TextAnchorY, Transform,
};

/// SubmitButton configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButtonProps {
    /// Button caption, doubling as the submitted value.
    pub value: String,
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub color: Color,
    pub background_color: Color,
    pub background_opacity: f32,
    pub name: Option<String>,
    pub transform: Transform,
}

impl Default for SubmitButtonProps {
    fn default() -> Self {
        Self {
            value: String::new(),
            width: 1.5,
            height: 0.1325,
            font_size: 0.0825,
            color: Color::BLACK,
            background_color: Color::WHITE,
            background_opacity: 1.0,
            name: None,
            transform: Transform::default(),
        }
    }
}

/// Visual description of a [`SubmitButton`].
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonVisual {
    pub transform: Transform,
    pub plate: Quad,
    pub value: GlyphRun,
    pub cursor: CursorIcon,
}

/// Clickable plate wired to a hidden native submit input, so form payloads
/// carry its value and submission runs the platform's own pipeline.
pub struct SubmitButton {
    props: SubmitButtonProps,
    bridge: NativeBridge,
    hovered: bool,
}

impl SubmitButton {
    /// Mount the hidden submit input into `form`.
    pub fn new(
        host: &mut dyn NativeHost,
        form: &FormContainer,
        props: SubmitButtonProps,
    ) -> Result<SubmitButton, MountError> {
        let bridge = NativeBridge::mount(host, Self::field_spec(&props), form.target())?;
        Ok(SubmitButton {
            props,
            bridge,
            hovered: false,
        })
    }

    fn field_spec(props: &SubmitButtonProps) -> FieldSpec {
        FieldSpec {
            kind: FieldKind::Submit,
            name: props.name.clone(),
            placeholder: None,
            default_value: Some(props.value.clone()),
            rows: 1,
            sizing: SizingHint::Intrinsic,
        }
    }

    pub fn set_props(&mut self, props: SubmitButtonProps) {
        self.bridge.sync_spec(Self::field_spec(&props));
        self.props = props;
    }

    pub fn props(&self) -> &SubmitButtonProps {
        &self.props
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Pointer click: ask the form to run its native submission.
    pub fn click(&mut self, form: &mut FormContainer) {
        log::trace!(target: "widgets.submit", "submit clicked: {:?}", self.props.value);
        form.request_submit();
    }

    /// Resolve this frame's drawable description.
    pub fn visual(&self) -> ButtonVisual {
        let props = &self.props;
        let plate = Quad {
            center: Vec2::ZERO,
            size: Vec2::new(props.width, props.height),
            color: props.background_color,
            opacity: props.background_opacity,
            render_order: BACKGROUND_ORDER,
            clipped: false,
        };
        let mut value = GlyphRun::new(props.value.clone(), Vec2::ZERO, props.font_size, props.color);
        value.anchor_x = TextAnchorX::Center;
        value.anchor_y = TextAnchorY::Middle;
        ButtonVisual {
            transform: props.transform,
            plate,
            value,
            cursor: if self.hovered {
                CursorIcon::Pointer
            } else {
                CursorIcon::Default
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHost;

    fn mounted() -> (RecordingHost, FormContainer, SubmitButton) {
        let mut host = RecordingHost::new();
        let form = FormContainer::mount(&mut host).unwrap();
        let button = SubmitButton::new(
            &mut host,
            &form,
            SubmitButtonProps {
                value: "Send".to_string(),
                ..SubmitButtonProps::default()
            },
        )
        .unwrap();
        (host, form, button)
    }

    #[test]
    fn submit_input_mounts_into_the_form_with_its_value() {
        let (host, form, _button) = mounted();
        let expected = format!(
            "mount:Submit:Some(\"Send\"):Form(FormId({}))",
            form.id().as_raw()
        );
        assert!(host.log.contains(&expected));
    }

    #[test]
    fn click_requests_a_native_submission() {
        let (host, mut form, mut button) = mounted();
        button.click(&mut form);
        assert!(host.log.contains("request_submit"));
    }

    #[test]
    fn plate_and_caption_follow_the_render_order_contract() {
        let (_host, _form, mut button) = mounted();
        let visual = button.visual();
        assert_eq!(visual.plate.size, Vec2::new(1.5, 0.1325));
        assert_eq!(visual.plate.render_order, BACKGROUND_ORDER);
        assert_eq!(visual.value.anchor_x, TextAnchorX::Center);
        assert_eq!(visual.value.anchor_y, TextAnchorY::Middle);
        assert_eq!(visual.cursor, CursorIcon::Default);

        button.set_hovered(true);
        assert_eq!(button.visual().cursor, CursorIcon::Pointer);
    }

    #[test]
    fn value_change_reapplies_the_native_spec() {
        let (host, _form, mut button) = mounted();
        host.log.clear();
        button.set_props(SubmitButtonProps {
            value: "Send now".to_string(),
            ..SubmitButtonProps::default()
        });
        assert_eq!(host.log.entries(), vec!["apply:None"]);
    }
}
