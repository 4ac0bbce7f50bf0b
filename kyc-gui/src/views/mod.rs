pub mod admin;
pub mod modals;
pub mod submission;

pub use admin::admin_view;
pub use submission::submission_view;

use iced::{
    widget::{scrollable, Space},
    Alignment, Length,
};
use kyc::route::Route;
use kyc_ui::{
    component::{button, card, separation, text},
    theme,
    widget::*,
};

use crate::state::{message::Msg, State};

/// Widest the page content grows on large windows.
const MAX_CONTENT_WIDTH: f32 = 960.0;

/// Header and scrollable body of a routed screen.
pub fn layout(state: &State, route: Route) -> Element<'_, Msg> {
    let body = match route {
        Route::Submission => submission_view(state),
        Route::Admin => admin_view(state),
    };
    Column::new()
        .push(header(route))
        .push(separation())
        .push(
            Container::new(scrollable(
                Container::new(Container::new(body).max_width(MAX_CONTENT_WIDTH))
                    .padding(20)
                    .center_x(Length::Fill),
            ))
            .height(Length::Fill)
            .width(Length::Fill)
            .style(theme::container::background),
        )
        .into()
}

fn header<'a>(route: Route) -> Element<'a, Msg> {
    let toggle = match route {
        Route::Submission => button::secondary("Admin"),
        Route::Admin => button::secondary("Back"),
    }
    .on_press(Msg::ToggleRoute)
    .width(Length::Fixed(90.0));

    Container::new(
        Row::new()
            .align_y(Alignment::Center)
            .spacing(10)
            .push(text::h4_bold("Identity Verification"))
            .push(Space::with_width(Length::Fill))
            .push(toggle),
    )
    .padding([15, 20])
    .width(Length::Fill)
    .style(theme::container::foreground)
    .into()
}

pub fn loading_view<'a>() -> Element<'a, Msg> {
    Container::new(text::p1_regular("Loading...").style(theme::text::secondary))
        .center(Length::Fill)
        .style(theme::container::background)
        .into()
}

/// Shown instead of the submission form outside of handheld devices.
pub fn access_denied_view<'a>() -> Element<'a, Msg> {
    let features = Column::new()
        .spacing(5)
        .push(text::p2_regular("- Selfie with the device camera"))
        .push(text::p2_regular("- Photo of an identity document"))
        .push(text::p2_regular("- Secure verification"));

    let content = Column::new()
        .spacing(15)
        .align_x(Alignment::Center)
        .push(text::h2("Mobile device required"))
        .push(
            text::p1_regular(
                "This system is only accessible from mobile devices. \
                 Please open this page on your phone or tablet.",
            )
            .style(theme::text::secondary),
        )
        .push(card::simple(
            Column::new()
                .spacing(10)
                .push(text::p1_medium("Features"))
                .push(features),
        ))
        .push(
            Row::new()
                .push(Space::with_width(Length::Fill))
                .push(button::link("Go to the admin console").on_press(Msg::ToggleRoute))
                .push(Space::with_width(Length::Fill)),
        );

    Container::new(Container::new(content).max_width(480.0).padding(20))
        .center(Length::Fill)
        .style(theme::container::background)
        .into()
}
