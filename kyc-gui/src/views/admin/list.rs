use iced::{widget::Space, Alignment, Length};
use kyc::models::{VerificationRecord, VerificationStatus};
use kyc_ui::{
    component::{badge, button, card, separation, text},
    theme,
    widget::*,
};

use crate::state::{message::Msg, State};

/// Title row of the console. Refresh and logout wait for the fetch in flight.
fn title<'a>(loading: bool) -> Row<'a, Msg> {
    let refresh = button::secondary(if loading { "Loading..." } else { "Refresh" })
        .on_press_maybe((!loading).then_some(Msg::AdminRefresh))
        .width(Length::Fixed(110.0));

    Row::new()
        .align_y(Alignment::Center)
        .spacing(10)
        .push(text::h2("Admin Panel"))
        .push(Space::with_width(Length::Fill))
        .push(refresh)
        .push(
            button::secondary("Logout")
                .on_press_maybe((!loading).then_some(Msg::AdminLogout))
                .width(Length::Fixed(90.0)),
        )
}

/// Shown while the record list is fetched, nothing of the previous list is
/// clickable.
pub fn fetching_view<'a>() -> Element<'a, Msg> {
    Column::new()
        .spacing(20)
        .push(title(true))
        .push(
            card::simple(
                Container::new(text::p1_regular("Loading...").style(theme::text::secondary))
                    .center_x(Length::Fill),
            )
            .width(Length::Fill),
        )
        .into()
}

pub fn list_view(state: &State) -> Element<'_, Msg> {
    let console = &state.console;

    let counts = console.counts();
    let stats = Column::new()
        .spacing(10)
        .push(
            Row::new()
                .spacing(10)
                .push(stat("Total applications", counts.total))
                .push(stat("Pending", counts.pending)),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(stat("Approved", counts.approved))
                .push(stat("Rejected", counts.rejected)),
        );

    let filter = console.filter();
    let toggles = VerificationStatus::ALL.into_iter().fold(
        Row::new().spacing(5).push(
            button::toggle("All", filter.status.is_none())
                .on_press(Msg::AdminFilterStatus(None))
                .width(Length::Fill),
        ),
        |row, status| {
            row.push(
                button::toggle(status.label(), filter.status == Some(status))
                    .on_press(Msg::AdminFilterStatus(Some(status)))
                    .width(Length::Fill),
            )
        },
    );
    let search = TextInput::new("Search by name, username or email", &filter.search)
        .on_input(Msg::AdminSearch)
        .style(theme::text_input::primary)
        .size(text::P2_SIZE)
        .padding(10);

    let content = Column::new()
        .spacing(20)
        .push(title(false))
        .push(stats)
        .push(Column::new().spacing(10).push(toggles).push(search));

    content.push(records(state)).into()
}

fn stat<'a>(label: &'static str, value: usize) -> Element<'a, Msg> {
    card::simple(
        Column::new()
            .spacing(5)
            .push(text::h3(value))
            .push(text::caption(label).style(theme::text::secondary)),
    )
    .width(Length::Fill)
    .into()
}

fn records(state: &State) -> Element<'_, Msg> {
    let console = &state.console;
    if console.records().is_empty() {
        return card::simple(
            Container::new(text::p1_regular("No applications yet.").style(theme::text::secondary))
                .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .into();
    }

    let rows: Vec<Element<'_, Msg>> = console.visible_records().map(record_row).collect();
    if rows.is_empty() {
        return card::simple(
            Container::new(
                text::p1_regular("No application matches the filter.")
                    .style(theme::text::secondary),
            )
            .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .into();
    }

    let mut list = Column::new();
    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            list = list.push(separation());
        }
        list = list.push(row);
    }
    Container::new(list)
        .style(theme::card::simple)
        .width(Length::Fill)
        .into()
}

pub fn status_badge<'a>(status: VerificationStatus) -> Container<'a, Msg> {
    match status {
        VerificationStatus::Pending => badge::pending(status.label()),
        VerificationStatus::Approved => badge::approved(status.label()),
        VerificationStatus::Rejected => badge::rejected(status.label()),
    }
}

fn record_row(record: &VerificationRecord) -> Element<'_, Msg> {
    let details = Column::new()
        .spacing(3)
        .push(text::p1_medium(record.full_name()))
        .push(text::p2_regular(&record.username).style(theme::text::secondary))
        .push(text::caption(&record.email).style(theme::text::secondary))
        .push_maybe(
            record
                .created_date()
                .map(|date| text::caption(date).style(theme::text::secondary)),
        );

    Button::new(
        Row::new()
            .align_y(Alignment::Center)
            .spacing(10)
            .push(details.width(Length::Fill))
            .push(status_badge(record.status)),
    )
    .padding(15)
    .width(Length::Fill)
    .style(theme::button::row)
    .on_press(Msg::AdminSelect(record.clone()))
    .into()
}
