pub mod detail;
pub mod list;
pub mod login;

pub use detail::detail_modal;
pub use list::{fetching_view, list_view};
pub use login::login_view;

use kyc::console::ConsoleState;
use kyc_ui::widget::Element;

use crate::state::{message::Msg, State};

pub fn admin_view(state: &State) -> Element<'_, Msg> {
    match state.console.state() {
        ConsoleState::Unauthenticated => login_view(state),
        ConsoleState::Loading => fetching_view(),
        ConsoleState::Listing | ConsoleState::Detail => list_view(state),
    }
}
