use iced::{widget::Space, Alignment, Length};
use kyc_ui::{
    component::{button, card, text},
    widget::*,
};

use crate::state::{Msg, WarningModalState};

pub fn warning_modal(modal_state: &WarningModalState) -> Element<'_, Msg> {
    let content = Column::new()
        .spacing(15)
        .width(Length::Fixed(340.0))
        .push(
            Row::new()
                .align_y(Alignment::Center)
                .push(text::h3(&modal_state.title))
                .push(Space::with_width(Length::Fill)),
        )
        .push(text::p1_regular(&modal_state.message))
        .push(
            Row::new()
                .push(Space::with_width(Length::Fill))
                .push(
                    button::primary("OK")
                        .on_press(Msg::WarningCloseModal)
                        .width(Length::Fixed(120.0)),
                ),
        );

    card::modal(content).into()
}
