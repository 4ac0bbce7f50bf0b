use iced::{widget::Space, Alignment, Length};
use kyc::models::{VerificationRecord, VerificationStatus};
use kyc_ui::{
    component::{button, card, separation, text},
    theme,
    widget::*,
};

use super::list::status_badge;
use crate::state::{message::Msg, State};

fn field<'a>(label: &'static str, value: impl Into<Element<'a, Msg>>) -> Element<'a, Msg> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(10)
        .push(
            Container::new(text::p2_regular(label).style(theme::text::secondary))
                .width(Length::Fixed(110.0)),
        )
        .push(value)
        .into()
}

fn document<'a>(label: &'static str, url: Option<&'a str>) -> Element<'a, Msg> {
    field(
        label,
        match url {
            Some(url) => text::p2_regular(url).style(theme::text::accent),
            None => text::p2_regular("Not provided").style(theme::text::secondary),
        },
    )
}

/// Review modal of `record`. Approve and reject are only offered while the
/// record is pending.
pub fn detail_modal<'a>(state: &'a State, record: &'a VerificationRecord) -> Element<'a, Msg> {
    let updating = state.console.updating().is_some();

    let personal = Column::new()
        .spacing(10)
        .push(text::p1_bold("Personal information"))
        .push(field("Full name", text::p2_regular(record.full_name())))
        .push(field("Username", text::p2_regular(&record.username)))
        .push(field("Email", text::p2_regular(&record.email)))
        .push(field("Phone", text::p2_regular(&record.phone)))
        .push(field("Status", status_badge(record.status)))
        .push_maybe(
            record
                .created_date()
                .map(|date| field("Submitted", text::p2_regular(date))),
        )
        .push_maybe(
            record
                .reviewed_by
                .as_deref()
                .map(|by| field("Reviewed by", text::p2_regular(by))),
        )
        .push_maybe(
            record
                .reviewed_date()
                .map(|date| field("Reviewed", text::p2_regular(date))),
        );

    let documents = Column::new()
        .spacing(10)
        .push(text::p1_bold("Documents"))
        .push(document("ID document", record.id_image_url.as_deref()))
        .push(document("Selfie", record.selfie_image_url.as_deref()));

    let actions = Row::new()
        .spacing(10)
        .push(Space::with_width(Length::Fill))
        .push_maybe(record.is_pending().then(|| {
            button::success("Approve")
                .on_press_maybe((!updating).then(|| {
                    Msg::AdminUpdateStatus(record.id.clone(), VerificationStatus::Approved)
                }))
                .width(Length::Fixed(100.0))
        }))
        .push_maybe(record.is_pending().then(|| {
            button::destructive("Reject")
                .on_press_maybe((!updating).then(|| {
                    Msg::AdminUpdateStatus(record.id.clone(), VerificationStatus::Rejected)
                }))
                .width(Length::Fixed(100.0))
        }))
        .push(
            button::secondary("Close")
                .on_press_maybe((!updating).then_some(Msg::AdminDismiss))
                .width(Length::Fixed(100.0)),
        );

    card::modal(
        Column::new()
            .spacing(15)
            .width(Length::Fixed(380.0))
            .push(text::h3("Application detail"))
            .push(separation())
            .push(personal)
            .push(separation())
            .push(documents)
            .push_maybe(updating.then(|| {
                text::caption("Updating...").style(theme::text::secondary)
            }))
            .push(actions),
    )
    .into()
}
