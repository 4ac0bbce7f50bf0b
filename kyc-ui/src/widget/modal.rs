use iced::widget::{center, mouse_area, opaque, stack};

use super::Element;
use crate::theme;

/// Centers `modal` over a dimmed `base`. Pressing the backdrop produces the
/// `on_blur` message, if any.
pub struct Modal<'a, Message> {
    base: Element<'a, Message>,
    modal: Element<'a, Message>,
    on_blur: Option<Message>,
}

impl<'a, Message> Modal<'a, Message> {
    pub fn new(base: impl Into<Element<'a, Message>>, modal: impl Into<Element<'a, Message>>) -> Self {
        Self {
            base: base.into(),
            modal: modal.into(),
            on_blur: None,
        }
    }

    pub fn on_blur(self, on_blur: Option<Message>) -> Self {
        Self { on_blur, ..self }
    }
}

impl<'a, Message: Clone + 'a> From<Modal<'a, Message>> for Element<'a, Message> {
    fn from(modal: Modal<'a, Message>) -> Self {
        let backdrop = mouse_area(center(opaque(modal.modal)).style(theme::container::overlay));
        let backdrop = match modal.on_blur {
            Some(msg) => backdrop.on_press(msg),
            None => backdrop,
        };
        stack![modal.base, opaque(backdrop)].into()
    }
}
