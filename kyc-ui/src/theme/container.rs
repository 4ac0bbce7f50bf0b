use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::{Background, Border};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

pub fn background(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.background)),
        ..Default::default()
    }
}

pub fn foreground(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.foreground)),
        ..Default::default()
    }
}

/// Dimmed backdrop behind a modal.
pub fn overlay(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.overlay)),
        ..Default::default()
    }
}

/// Thin horizontal line.
pub fn rule(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.rule)),
        border: Border::default(),
        ..Default::default()
    }
}
