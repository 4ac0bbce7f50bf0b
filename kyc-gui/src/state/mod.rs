use std::sync::Arc;

use iced::{window, Subscription, Task};
use kyc::{
    api::VerificationApi,
    auth::CredentialCheck,
    console::AdminConsole,
    form::{Field, SubmissionForm},
    host::Host,
    route::Route,
    shell::{Screen, Shell},
};
use kyc_ui::widget::{modal::Modal, Element};

use crate::views;
pub use message::Msg;
pub use modals::WarningModalState;

pub mod message;
pub mod modals;
pub mod update;

/// Main application state
#[derive(Debug)]
pub struct State {
    pub host: Host,
    pub shell: Shell,
    pub form: SubmissionForm,
    /// Required fields left empty at the last submit attempt.
    pub missing: Vec<Field>,
    pub console: AdminConsole,
    pub api: Arc<dyn VerificationApi>,
    pub warning: Option<WarningModalState>,
}

impl State {
    /// Builds the state and mounts the shell on `host`.
    pub fn new(
        mut host: Host,
        api: Arc<dyn VerificationApi>,
        check: Arc<dyn CredentialCheck>,
    ) -> Self {
        let mut shell = Shell::new();
        shell.mount(&mut host);
        Self {
            host,
            shell,
            form: SubmissionForm::new(),
            missing: Vec::new(),
            console: AdminConsole::new(check),
            api,
            warning: None,
        }
    }

    /// Application entry point: the window width is not known yet, ask for it.
    pub fn init(
        host: Host,
        api: Arc<dyn VerificationApi>,
        check: Arc<dyn CredentialCheck>,
    ) -> (Self, Task<Msg>) {
        let state = Self::new(host, api, check);
        let task = window::get_oldest()
            .and_then(window::get_size)
            .map(|size| Msg::WindowResized(size.width));
        (state, task)
    }

    pub fn title(&self) -> String {
        match self.shell.route() {
            Some(Route::Admin) => "Identity Verification - Admin".to_string(),
            _ => "Identity Verification".to_string(),
        }
    }

    /// Resize events are only listened to while the shell is mounted.
    pub fn subscription(&self) -> Subscription<Msg> {
        if self.shell.is_mounted() {
            window::resize_events().map(|(_, size)| Msg::WindowResized(size.width))
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Msg> {
        let content = match self.shell.screen() {
            Screen::Loading => views::loading_view(),
            Screen::AccessDenied => views::access_denied_view(),
            Screen::Routed(route) => views::layout(self, route),
        };

        if let Some(warning) = &self.warning {
            Modal::new(content, views::modals::warning_modal(warning))
                .on_blur(Some(Msg::WarningCloseModal))
                .into()
        } else if let Some(record) = self
            .console
            .selected()
            .filter(|_| self.shell.screen() == Screen::Routed(Route::Admin))
        {
            Modal::new(content, views::admin::detail_modal(self, record))
                .on_blur(Some(Msg::AdminDismiss))
                .into()
        } else {
            content
        }
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.shell.unmount();
    }
}

// NOTE: implementation of State::update() is in src/state/update.rs
