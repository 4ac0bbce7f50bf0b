use iced::Length;
use kyc_ui::{
    component::{button, card, form, text},
    theme,
    widget::*,
};

use crate::state::{message::Msg, State};

pub fn login_view(state: &State) -> Element<'_, Msg> {
    let token = form::Value::new(state.console.token(), true);
    let form = form::Form::new("Enter token", &token, Msg::AdminUpdateToken)
        .label("Auth Token:")
        .secure()
        .on_submit(Msg::AdminLogin)
        .size(text::P1_SIZE)
        .padding(10);

    Container::new(card::simple(
        Column::new()
            .spacing(20)
            .push(text::h2("Admin Login"))
            .push(
                text::p2_regular("Enter the admin token to review applications.")
                    .style(theme::text::secondary),
            )
            .push(form)
            .push(
                button::primary("Login")
                    .on_press(Msg::AdminLogin)
                    .width(Length::Fill),
            ),
    ))
    .max_width(420.0)
    .center_x(Length::Fill)
    .into()
}
