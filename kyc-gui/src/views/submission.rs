use iced::{widget::Space, Alignment, Length};
use kyc::form::Field;
use kyc_ui::{
    component::{button, card, form, text},
    theme,
    widget::*,
};

use crate::state::{message::Msg, State};

pub fn submission_view(state: &State) -> Element<'_, Msg> {
    if state.form.is_submitted() {
        success_view()
    } else {
        form_view(state)
    }
}

fn form_view(state: &State) -> Element<'_, Msg> {
    let draft = state.form.draft();
    let email_warning = state.form.email_warning();

    let fields = Field::ALL.into_iter().fold(
        Column::new().spacing(15),
        |col, field| {
            let missing = state.missing.contains(&field);
            let (valid, warning) = if missing {
                (false, Some("This field is required"))
            } else if field == Field::Email && email_warning.is_some() {
                (false, email_warning)
            } else {
                (true, None)
            };
            let value = form::Value::new(draft.get(field), valid);
            col.push(
                form::Form::new(field.placeholder(), &value, move |v| {
                    Msg::FormUpdate(field, v)
                })
                .label(field.label())
                .maybe_warning(warning)
                .on_submit(Msg::FormSubmit)
                .size(text::P1_SIZE)
                .padding(10),
            )
        },
    );

    let content = Column::new()
        .spacing(20)
        .push(
            Column::new()
                .spacing(5)
                .push(text::h2("Identity Verification Form"))
                .push(text::p2_regular("Please fill in all fields").style(theme::text::secondary)),
        )
        .push_maybe((!state.missing.is_empty()).then(|| {
            card::warning(format!(
                "Missing fields: {}",
                state
                    .missing
                    .iter()
                    .map(|f| f.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
            .width(Length::Fill)
        }))
        .push(card::simple(
            Column::new()
                .spacing(20)
                .push(text::h4_bold("Personal information"))
                .push(fields),
        ))
        .push(
            button::primary("Submit")
                .on_press(Msg::FormSubmit)
                .width(Length::Fill),
        );

    content.into()
}

fn success_view<'a>() -> Element<'a, Msg> {
    card::success(
        Column::new()
            .spacing(15)
            .align_x(Alignment::Center)
            .push(text::h3("Application submitted!"))
            .push(text::p1_regular(
                "Your identity verification application was submitted successfully.",
            ))
            .push(Space::with_height(Length::Fixed(10.0)))
            .push(
                button::primary("New submission")
                    .on_press(Msg::FormNewSubmission)
                    .width(Length::Fixed(200.0)),
            ),
    )
    .width(Length::Fill)
    .into()
}
