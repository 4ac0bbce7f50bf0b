use iced::Task;
use kyc::{
    console::{Request, Response, Session},
    form::{Field, FormError},
    models::{RecordId, VerificationRecord, VerificationStatus},
};

use super::{message::Msg, State, WarningModalState};

// Update routing logic
impl State {
    #[rustfmt::skip]
    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        tracing::debug!("{:?}", message);
        let request = match message {
            // Host
            Msg::WindowResized(width) => { self.on_window_resized(width); None }
            Msg::ToggleRoute => { self.on_toggle_route(); None }

            // Submission form
            Msg::FormUpdate(field, value) => { self.on_form_update(field, value); None }
            Msg::FormSubmit => { self.on_form_submit(); None }
            Msg::FormNewSubmission => { self.on_form_new_submission(); None }

            // Admin console
            Msg::AdminUpdateToken(token) => { self.console.set_token(token); None }
            Msg::AdminLogin => self.on_admin_login(),
            Msg::AdminLogout => { self.console.logout(); None }
            Msg::AdminRefresh => self.console.fetch_verifications(),
            Msg::AdminSelect(record) => { self.on_admin_select(record); None }
            Msg::AdminDismiss => { self.on_admin_dismiss(); None }
            Msg::AdminUpdateStatus(id, status) => self.on_admin_update_status(id, status),
            Msg::AdminResponse(session, response) => self.on_admin_response(session, response),
            Msg::AdminFilterStatus(status) => { self.console.set_status_filter(status); None }
            Msg::AdminSearch(search) => { self.console.set_search(search); None }

            // Warnings
            Msg::WarningCloseModal => { self.on_warning_close_modal(); None }
        };
        match request {
            Some(request) => self.perform(request),
            None => Task::none(),
        }
    }

    /// Runs `request` against the backend, the answer comes back as
    /// [`Msg::AdminResponse`] tagged with the session that issued it.
    fn perform(&self, request: Request) -> Task<Msg> {
        let api = self.api.clone();
        let token = self.console.token().to_string();
        let session = self.console.session();
        Task::perform(request.execute(api, token), move |response| {
            Msg::AdminResponse(session, response)
        })
    }
}

// Host
impl State {
    fn on_window_resized(&mut self, width: f32) {
        self.host.viewport.resize(width);
        self.shell.sync();
    }

    fn on_toggle_route(&mut self) {
        self.shell.toggle_route(&mut self.host);
        if self.shell.sync() {
            tracing::info!("route changed to {:?}", self.shell.route());
        }
    }
}

// Submission form
impl State {
    fn on_form_update(&mut self, field: Field, value: String) {
        self.form.update(field, value);
        if !self.missing.is_empty() {
            self.missing = self.form.draft().missing_fields();
        }
    }

    fn on_form_submit(&mut self) {
        match self.form.submit() {
            Ok(()) => self.missing.clear(),
            Err(FormError::MissingFields(fields)) => self.missing = fields,
        }
    }

    fn on_form_new_submission(&mut self) {
        self.form.new_submission();
        self.missing.clear();
    }
}

// Admin console
impl State {
    fn on_admin_login(&mut self) -> Option<Request> {
        let token = self.console.token().to_string();
        match self.console.authenticate(token) {
            Ok(request) => Some(request),
            Err(e) => {
                self.on_warning_show_modal("Authentication failed", e.to_string());
                None
            }
        }
    }

    fn on_admin_select(&mut self, record: VerificationRecord) {
        if self.console.updating().is_none() {
            self.console.select_record(record);
        }
    }

    /// The modal stays up until the in-flight status change is answered.
    fn on_admin_dismiss(&mut self) {
        if self.console.updating().is_none() {
            self.console.dismiss();
        }
    }

    fn on_admin_update_status(
        &mut self,
        id: RecordId,
        status: VerificationStatus,
    ) -> Option<Request> {
        let pending = self
            .console
            .selected()
            .map(|r| r.id == id && r.is_pending())
            .unwrap_or(false);
        if !pending {
            tracing::warn!("ignoring status change of {}: not a selected pending record", id);
            return None;
        }
        self.console.update_status(id, status)
    }

    fn on_admin_response(&mut self, session: Session, response: Response) -> Option<Request> {
        self.console.on_response(session, response)
    }
}

// Warnings
impl State {
    fn on_warning_show_modal<T: Into<String>, M: Into<String>>(&mut self, title: T, message: M) {
        self.warning = Some(WarningModalState::new(title, message));
    }

    fn on_warning_close_modal(&mut self) {
        self.warning = None;
    }
}
