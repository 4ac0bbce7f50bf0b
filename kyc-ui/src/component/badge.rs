use iced::Length;

use crate::{component::text, theme, widget::*};

fn pill<'a, T: 'a>(
    label: &'static str,
    style: fn(&crate::theme::Theme) -> iced::widget::container::Style,
) -> Container<'a, T> {
    Container::new(text::caption(label).font(crate::font::MEDIUM))
        .padding([4, 10])
        .center_x(Length::Shrink)
        .style(style)
}

pub fn pending<'a, T: 'a>(label: &'static str) -> Container<'a, T> {
    pill(label, theme::pill::pending)
}

pub fn approved<'a, T: 'a>(label: &'static str) -> Container<'a, T> {
    pill(label, theme::pill::approved)
}

pub fn rejected<'a, T: 'a>(label: &'static str) -> Container<'a, T> {
    pill(label, theme::pill::rejected)
}
