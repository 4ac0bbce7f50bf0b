pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

/// One pixel horizontal rule.
pub fn separation<'a, T: 'a>() -> Container<'a, T> {
    Container::new(iced::widget::Space::with_height(Length::Fixed(1.0)))
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(theme::container::rule)
}
