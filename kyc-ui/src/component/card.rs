use crate::{component::text, theme, widget::*};

pub fn simple<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::simple)
}

pub fn modal<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content).padding(20).style(theme::card::modal)
}

pub fn warning<'a, T: 'a>(message: String) -> Container<'a, T> {
    Container::new(text::p2_regular(message))
        .padding(15)
        .style(theme::card::warning)
}

pub fn success<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::success)
}
