use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t).font(MEDIUM))).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t))).style(theme::button::secondary)
}

pub fn success<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t).font(MEDIUM))).style(theme::button::success)
}

pub fn destructive<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t).font(MEDIUM))).style(theme::button::destructive)
}

pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t)).padding(5)).style(theme::button::transparent)
}

/// Secondary button rendered as selected, for tab-like toggles.
pub fn toggle<'a, T: 'a>(t: &'static str, active: bool) -> Button<'a, T> {
    if active {
        primary(t)
    } else {
        secondary(t)
    }
}

fn content<'a, T: 'a>(text: Text<'a>) -> Container<'a, T> {
    container(text)
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5)
}
